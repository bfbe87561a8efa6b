//! Simulation configuration handed from the form to the runner.

use std::time::Duration;

/// The odds, cadence and price of one simulated lottery.
///
/// Immutable once created. Construction is the only place the positive
/// `chances` precondition is checked; everything downstream relies on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    chances: u64,
    interval: Duration,
    cost_per_ticket: f64,
}

impl SimulationConfig {
    /// Create a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `chances` is zero or `cost_per_ticket` is negative or not
    /// finite. The form's validation rejects both before this is reached.
    pub fn new(chances: u64, interval: Duration, cost_per_ticket: f64) -> Self {
        assert!(chances > 0, "chances must be positive");
        assert!(
            cost_per_ticket.is_finite() && cost_per_ticket >= 0.0,
            "cost per ticket must be a non-negative finite number"
        );
        Self {
            chances,
            interval,
            cost_per_ticket,
        }
    }

    /// Convenience constructor taking the interval in milliseconds.
    pub fn from_millis(chances: u64, interval_ms: u64, cost_per_ticket: f64) -> Self {
        Self::new(chances, Duration::from_millis(interval_ms), cost_per_ticket)
    }

    /// Total number of equally likely outcomes.
    pub const fn chances(&self) -> u64 {
        self.chances
    }

    /// Time between draws.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Price of a single ticket.
    pub const fn cost_per_ticket(&self) -> f64 {
        self.cost_per_ticket
    }
}
