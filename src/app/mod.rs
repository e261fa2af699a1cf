//! Application State
//!
//! Hosts the sign-up form: owns the controller and turns terminal events
//! into form events.

mod config;
mod input;

use std::time::{Duration, Instant};

use ratatui::Frame;

use crate::form::{FormController, FormPage};
use crate::ui::Renderer;

pub use config::AppConfig;

pub struct App {
    pub config: AppConfig,
    pub controller: FormController,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let page = FormPage::new(config.mask_password);
        let controller = FormController::new(page, config.delays());

        Self {
            config,
            controller,
            should_quit: false,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        Renderer::render(frame, self.controller.page());
    }

    /// Run timers that have come due
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    /// How long to wait for input before the next timer is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let tick = self.config.tick_rate();
        match self.controller.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(tick),
            None => tick,
        }
    }
}
