//! Help Bar Component
//!
//! Key hints along the bottom of the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const HINTS: &[(&str, &str)] = &[
    ("Tab/S-Tab", "next/prev"),
    ("Enter", "submit"),
    ("C-s", "show pwd"),
    ("C-u", "clear"),
    ("Esc", "quit"),
];

/// Form key hints
pub struct HelpBar;

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
        let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let spans = HINTS.iter().enumerate().flat_map(|(i, &(key, action))| {
            let lead = (i > 0).then(|| sep.clone());
            lead.into_iter().chain([
                Span::styled(key, key_style),
                Span::styled(format!(" {action}"), Style::default().fg(Color::Gray)),
            ])
        });

        buf.set_line(area.x, area.y, &Line::from_iter(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_rendered_in_order() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        HelpBar.render(area, &mut buf);

        let line: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(line.starts_with("Tab/S-Tab next/prev │ Enter submit"));
        assert!(line.contains("C-s show pwd │ C-u clear │ Esc quit"));
    }
}
