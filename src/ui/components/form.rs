//! Sign-up Form Component
//!
//! Draws the three inputs with their checkmarks and errors, the password
//! strength meter, the caps-lock warning, the submit button and the result.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::strength::StrengthBar;
use crate::form::FormPage;
use crate::validate::Field;

const CHECK: &str = "✔";
const LABEL_WIDTH: u16 = 11;

/// Sign-up form widget
pub struct FormWidget<'a> {
    page: &'a FormPage,
}

impl<'a> FormWidget<'a> {
    pub fn new(page: &'a FormPage) -> Self {
        Self { page }
    }

    /// Text shown in the input box, scrolled so the caret stays visible
    fn visible_value(&self, field: Field, width: usize) -> (String, usize) {
        let input = self.page.input(field);
        let offset = (input.cursor() + 1).saturating_sub(width);

        let masked = field == Field::Password && self.page.is_password_masked();
        let text: String = input
            .value()
            .chars()
            .skip(offset)
            .take(width)
            .map(|c| if masked { '*' } else { c })
            .collect();

        (text, input.cursor().saturating_sub(offset))
    }

    fn render_field(&self, field: Field, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let is_active = field == self.page.focused();

        let label_style = if is_active {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        buf.set_string(x, y, format!("{}*:", field.label()), label_style);

        // Leave room for the checkmark
        let value_x = x + LABEL_WIDTH;
        let value_width = width.saturating_sub(LABEL_WIDTH + 2);
        let field_bg = if is_active { Color::DarkGray } else { Color::Black };

        buf.set_style(Rect::new(value_x, y, value_width, 1), Style::default().bg(field_bg));

        let (text, caret) = self.visible_value(field, value_width as usize);
        buf.set_string(value_x, y, &text, Style::default().fg(Color::White).bg(field_bg));

        if is_active {
            let cursor_x = value_x + caret as u16;
            if cursor_x < value_x + value_width {
                if let Some(cell) = buf.cell_mut((cursor_x, y)) {
                    cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        }

        if self.page.is_checked(field) {
            buf.set_string(value_x + value_width + 1, y, CHECK, Style::default().fg(Color::Green));
        }

        if let Some(error) = self.page.error(field) {
            buf.set_stringn(value_x, y + 1, error, width.saturating_sub(LABEL_WIDTH) as usize, Style::default().fg(Color::Red));
        }
    }

    fn render_submit(&self, x: u16, y: u16, buf: &mut Buffer) {
        let style = if self.page.submit_enabled() {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        buf.set_string(x, y, " Submit ", style);
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Center the form
        let form_width = 64u16.min(area.width.saturating_sub(4));
        let form_height = 17u16.min(area.height);
        let form_x = area.x + (area.width.saturating_sub(form_width)) / 2;
        let form_y = area.y + (area.height.saturating_sub(form_height)) / 2;
        let form_area = Rect::new(form_x, form_y, form_width, form_height);

        Clear.render(form_area, buf);

        let block = Block::default()
            .title(" Sign Up ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(form_area);
        block.render(form_area, buf);

        if inner.height < 15 || inner.width < 40 {
            buf.set_string(inner.x, inner.y, "Terminal too small", Style::default().fg(Color::Red));
            return;
        }

        let mut y = inner.y + 1;
        for field in Field::ALL {
            self.render_field(field, inner.x + 1, y, inner.width.saturating_sub(1), buf);
            y += 3;
        }

        // Strength meter sits under the password error line
        let meter_area = Rect::new(inner.x + 1 + LABEL_WIDTH, y - 1, inner.width.saturating_sub(LABEL_WIDTH + 2), 1);
        StrengthBar::new(
            self.page.strength_percent(),
            self.page.strength_label(),
            self.page.strength_rating(),
        )
        .render(meter_area, buf);

        if self.page.caps_warning_visible() {
            let warning = Line::from(vec![
                Span::styled("⚠ ", Style::default().fg(Color::Yellow)),
                Span::styled("Caps Lock is on", Style::default().fg(Color::Yellow)),
            ]);
            buf.set_line(inner.x + 1 + LABEL_WIDTH, y, &warning, inner.width);
        }

        y += 2;
        self.render_submit(inner.x + 1 + LABEL_WIDTH, y, buf);

        if let Some(result) = self.page.result() {
            buf.set_string(
                inner.x + 1 + LABEL_WIDTH,
                y + 2,
                result,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(page: &FormPage) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        FormWidget::new(page).render(area, &mut buf);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect()
            })
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }

    #[test]
    fn test_password_masked() {
        let mut page = FormPage::new(true);
        page.input_mut(Field::Password).set_value("Abcdef1!");
        let lines = render(&page);
        assert!(contains(&lines, "********"));
        assert!(!contains(&lines, "Abcdef1!"));

        page.toggle_password_visibility();
        assert!(contains(&render(&page), "Abcdef1!"));
    }

    #[test]
    fn test_errors_checks_and_result() {
        let mut page = FormPage::new(true);
        page.show_error(Field::Email, "Invalid email format.");
        page.mark_check(Field::Name, true);
        page.set_strength(50, "Fair");
        page.set_caps_warning(true);
        page.show_result("Form submitted successfully (demo).");

        let lines = render(&page);
        assert!(contains(&lines, "Invalid email format."));
        assert!(contains(&lines, CHECK));
        assert!(contains(&lines, "Password strength: 50% (Fair)"));
        assert!(contains(&lines, "Caps Lock is on"));
        assert!(contains(&lines, "Form submitted successfully (demo)."));
    }

    #[test]
    fn test_hidden_elements_not_drawn() {
        let page = FormPage::new(true);
        let lines = render(&page);
        assert!(!contains(&lines, CHECK));
        assert!(!contains(&lines, "Caps Lock is on"));
        assert!(contains(&lines, "Submit"));
    }

    #[test]
    fn test_meter_fill_tracks_page() {
        let mut page = FormPage::new(true);
        let bars = |lines: &[String]| lines.iter().map(|l| l.matches('█').count()).sum::<usize>();
        assert_eq!(bars(&render(&page)), 0);

        page.set_strength(100, "Strong");
        let lines = render(&page);
        assert!(bars(&lines) > 0);
        assert!(!lines.iter().any(|l| l.contains('░')));
        assert!(contains(&lines, "(Strong)"));
    }

    #[test]
    fn test_long_value_scrolls_to_caret() {
        let mut page = FormPage::new(true);
        let long = format!("{}Z", "a".repeat(100));
        page.input_mut(Field::Name).set_value(&long);
        assert!(contains(&render(&page), "aaZ"));
    }
}
