//! Form Controller
//!
//! Routes field events to the validators and reflects the verdicts onto
//! the page. All business rules live in `crate::validate`; this module only
//! decides when to run them and what to show.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use super::event::{DefaultAction, FormEvent, KeyPress};
use super::page::FormPage;
use super::timer::{TimerAction, Timers};
use crate::validate::{Field, PasswordCriteria, Verdict};

pub const DIGITS_NOT_ALLOWED: &str = "Digits not allowed in name.";
pub const LEADING_SPACE: &str = "Password cannot start with a space.";
pub const SUBMIT_SUCCESS: &str = "Form submitted successfully (demo).";

/// How long transient messages and the success banner stay up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientDelays {
    pub digit_warning: Duration,
    pub space_warning: Duration,
    pub success_reset: Duration,
}

impl Default for TransientDelays {
    fn default() -> Self {
        Self {
            digit_warning: Duration::from_millis(1000),
            space_warning: Duration::from_millis(900),
            success_reset: Duration::from_millis(1200),
        }
    }
}

pub struct FormController {
    page: FormPage,
    timers: Timers,
    delays: TransientDelays,
}

impl FormController {
    pub fn new(mut page: FormPage, delays: TransientDelays) -> Self {
        page.set_submit_enabled(false);
        Self {
            page,
            timers: Timers::new(),
            delays,
        }
    }

    pub fn page(&self) -> &FormPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut FormPage {
        &mut self.page
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// True when all three fields currently validate
    pub fn is_ready(&self) -> bool {
        Field::ALL.iter().all(|f| self.verdict(*f).is_ok())
    }

    pub fn dispatch(&mut self, event: FormEvent, now: Instant) -> DefaultAction {
        match event {
            FormEvent::KeyDown { field, key } => self.on_key_down(field, key, now),
            FormEvent::Input(field) => {
                self.on_input(field);
                DefaultAction::Allow
            }
            FormEvent::Blur(field) => {
                self.on_blur(field);
                DefaultAction::Allow
            }
            FormEvent::Submit => {
                self.on_submit(now);
                DefaultAction::Prevent
            }
        }
    }

    /// Run every timer due at `now`
    pub fn tick(&mut self, now: Instant) {
        for action in self.timers.take_due(now) {
            match action {
                TimerAction::ClearError { field, token } => {
                    if self.page.hide_error_if_owned(field, token) {
                        trace!(field = field.label(), "transient message expired");
                    }
                }
                TimerAction::ResetForm => self.reset(),
            }
        }
    }

    fn verdict(&self, field: Field) -> Verdict {
        field.validate(self.page.value(field))
    }

    fn on_key_down(&mut self, field: Field, key: KeyPress, now: Instant) -> DefaultAction {
        match field {
            Field::Name => {
                if key.ch.is_some_and(|c| c.is_ascii_digit()) {
                    self.show_transient(field, DIGITS_NOT_ALLOWED, self.delays.digit_warning, now);
                    return DefaultAction::Prevent;
                }
            }
            Field::Password => {
                self.page.set_caps_warning(key.caps_lock);
                let at_start = self.page.input(field).cursor() == 0;
                if key.ch == Some(' ') && at_start {
                    self.show_transient(field, LEADING_SPACE, self.delays.space_warning, now);
                    return DefaultAction::Prevent;
                }
            }
            Field::Email => {}
        }
        DefaultAction::Allow
    }

    fn on_input(&mut self, field: Field) {
        if field == Field::Password {
            self.update_strength();
        }

        let verdict = self.reflect_verdict(field);
        if field != Field::Password {
            self.page.mark_check(field, verdict.is_ok());
        }
        self.update_submit_state();
    }

    fn on_blur(&mut self, field: Field) {
        if field == Field::Password {
            self.page.set_caps_warning(false);
        }
        self.reflect_verdict(field);
        self.update_submit_state();
    }

    fn on_submit(&mut self, now: Instant) {
        let verdicts = Field::ALL.map(|f| (f, self.verdict(f)));

        if verdicts.iter().all(|(_, v)| v.is_ok()) {
            info!("form submitted");
            self.page.show_result(SUBMIT_SUCCESS);
            self.timers.schedule(now, self.delays.success_reset, TimerAction::ResetForm);
            return;
        }

        for (field, verdict) in verdicts {
            if let Err(e) = verdict {
                self.page.show_error(field, &e.to_string());
            }
        }
        debug!("submit rejected");
        self.update_submit_state();
    }

    /// Show or hide the field's error to match its current verdict
    fn reflect_verdict(&mut self, field: Field) -> Verdict {
        let verdict = self.verdict(field);
        match verdict {
            Ok(()) => self.page.hide_error(field),
            Err(e) => {
                self.page.show_error(field, &e.to_string());
            }
        }
        debug!(field = field.label(), ok = verdict.is_ok(), "validated");
        verdict
    }

    fn update_strength(&mut self) {
        let criteria = PasswordCriteria::evaluate(self.page.value(Field::Password));
        self.page.set_strength(criteria.percent(), criteria.label());
        self.page.mark_check(Field::Password, criteria.is_complete());
    }

    fn update_submit_state(&mut self) {
        let ready = self.is_ready();
        self.page.set_submit_enabled(ready);
    }

    fn show_transient(&mut self, field: Field, message: &str, delay: Duration, now: Instant) {
        let token = self.page.show_error(field, message);
        self.timers.schedule(now, delay, TimerAction::ClearError { field, token });
        trace!(field = field.label(), text = message, "keystroke suppressed");
    }

    fn reset(&mut self) {
        self.page.reset_inputs();
        let empty = PasswordCriteria::default();
        self.page.set_strength(empty.percent(), empty.label());
        for field in Field::ALL {
            self.page.mark_check(field, false);
        }
        self.page.hide_result();
        self.page.set_submit_enabled(false);
        info!("form reset");
    }
}
