//! Renderer
//!
//! Main rendering logic for the application.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::components::{FormWidget, HelpBar};
use crate::form::FormPage;

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, page: &FormPage) {
        let chunks = create_main_layout(frame.area());

        frame.render_widget(FormWidget::new(page), chunks[0]);
        frame.render_widget(HelpBar, chunks[1]);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size)
}
