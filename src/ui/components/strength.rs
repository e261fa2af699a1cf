//! Strength Bar Component

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Horizontal meter filled to `percent`, followed by its accessible label
/// and the qualitative rating.
pub struct StrengthBar<'a> {
    percent: u16,
    label: &'a str,
    rating: &'a str,
}

impl<'a> StrengthBar<'a> {
    pub fn new(percent: u16, label: &'a str, rating: &'a str) -> Self {
        Self { percent: percent.min(100), label, rating }
    }

    fn color(&self) -> Color {
        match self.percent {
            0..=25 => Color::Red,
            26..=50 => Color::Yellow,
            51..=75 => Color::Cyan,
            _ => Color::Green,
        }
    }
}

impl Widget for StrengthBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar_width = area.width.saturating_sub(self.label.len() as u16 + 10).min(24);
        let filled = bar_width * self.percent / 100;

        for i in 0..bar_width {
            let (symbol, style) = if i < filled {
                ("█", Style::default().fg(self.color()))
            } else {
                ("░", Style::default().fg(Color::DarkGray))
            };
            buf.set_string(area.x + i, area.y, symbol, style);
        }

        let text = format!(" {} ({})", self.label, self.rating);
        buf.set_string(area.x + bar_width, area.y, &text, Style::default().fg(Color::Gray));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(percent: u16, label: &str, rating: &str) -> (usize, usize, String) {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StrengthBar::new(percent, label, rating).render(area, &mut buf);

        let line: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        let filled = line.chars().filter(|&c| c == '█').count();
        let empty = line.chars().filter(|&c| c == '░').count();
        (filled, empty, line)
    }

    #[test]
    fn test_fill_follows_percent() {
        let (filled, empty, _) = render(0, "Password strength: 0%", "Empty");
        assert_eq!((filled, empty), (0, 24));

        let (filled, empty, _) = render(50, "Password strength: 50%", "Fair");
        assert_eq!((filled, empty), (12, 12));

        let (filled, empty, _) = render(100, "Password strength: 100%", "Strong");
        assert_eq!((filled, empty), (24, 0));
    }

    #[test]
    fn test_rating_comes_from_caller() {
        let (_, _, line) = render(75, "Password strength: 75%", "Good");
        assert!(line.contains("Password strength: 75% (Good)"));
    }
}
