//! One-shot draw timer.
//!
//! Each arm creates a fresh `after` channel that delivers exactly one
//! message; an idle timer is a `never` channel. Nothing fires unless the
//! tick handler asks for it again, so draws never overlap.

use crate::runtime::Scheduler;
use crossbeam_channel::{after, never, Receiver};
use std::time::{Duration, Instant};

/// The draw timer polled by the main loop.
#[derive(Debug)]
pub struct TickTimer {
    rx: Receiver<Instant>,
    armed: bool,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer {
    /// An idle timer.
    pub fn new() -> Self {
        Self {
            rx: never(),
            armed: false,
        }
    }

    /// Fire once after `delay`, replacing any pending firing.
    pub fn arm(&mut self, delay: Duration) {
        self.rx = after(delay);
        self.armed = true;
    }

    /// Drop the pending firing, if any.
    pub fn disarm(&mut self) {
        self.rx = never();
        self.armed = false;
    }

    /// Whether a firing is pending.
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// The receiver to `select!` on.
    pub const fn receiver(&self) -> &Receiver<Instant> {
        &self.rx
    }

    /// Mark the pending firing as consumed.
    pub fn fired(&mut self) {
        self.disarm();
    }
}

impl Scheduler for TickTimer {
    fn schedule_tick(&mut self, delay: Duration) {
        self.arm(delay);
    }
}
