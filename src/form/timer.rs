//! Deferred Actions
//!
//! Fire-once timers driven by an externally supplied clock.

use std::time::{Duration, Instant};

use super::page::MessageToken;
use crate::validate::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Hide a field's error if `token` still owns it
    ClearError { field: Field, token: MessageToken },
    /// Return the form to its initial state after a successful submit
    ResetForm,
}

#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(Instant, TimerAction)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, action: TimerAction) {
        self.pending.push((now + delay, action));
    }

    /// Remove and return every action due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(deadline, _)| *deadline <= now);
        self.pending = rest;
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, action)| action).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
