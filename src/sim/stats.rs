//! Derived statistics, recomputed on every render and never stored.

use super::config::SimulationConfig;
use super::format::round_duration;
use super::runner::SimulationState;
use std::time::{Duration, Instant};

const SECOND: Duration = Duration::from_secs(1);
const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);
const DAY: Duration = Duration::from_secs(24 * 3600);

/// Wall-clock time needed to draw once per possible outcome at the
/// configured interval.
///
/// Rounded to hours past a day, to minutes past an hour, to seconds
/// otherwise.
pub fn time_to_cover_odds(chances: u64, interval: Duration) -> Duration {
    let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
    let total = Duration::from_millis(chances.saturating_mul(interval_ms));

    if total > DAY {
        round_duration(total, HOUR)
    } else if total > HOUR {
        round_duration(total, MINUTE)
    } else {
        round_duration(total, SECOND)
    }
}

/// Snapshot of every number shown in the statistics block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Total number of outcomes.
    pub chances: u64,
    /// Time between draws.
    pub interval: Duration,
    /// Price of one ticket.
    pub cost_per_ticket: f64,
    /// Time to draw once per outcome.
    pub time_to_cover_odds: Duration,
    /// Cost of buying one ticket per outcome.
    pub estimated_cost: f64,
    /// Time since the run started, frozen at the winning draw.
    pub elapsed: Duration,
    /// Tickets drawn so far.
    pub ticket_count: u64,
    /// Money spent so far.
    pub total_cost: f64,
    /// Whether the run is still drawing.
    pub running: bool,
}

impl Statistics {
    /// Compute statistics for a run at time `now`.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(config: &SimulationConfig, state: &SimulationState, now: Instant) -> Self {
        let until = state.ended_at().unwrap_or(now);
        let elapsed = until.saturating_duration_since(state.started_at());

        Self {
            chances: config.chances(),
            interval: config.interval(),
            cost_per_ticket: config.cost_per_ticket(),
            time_to_cover_odds: time_to_cover_odds(config.chances(), config.interval()),
            estimated_cost: config.cost_per_ticket() * config.chances() as f64,
            elapsed: round_duration(elapsed, SECOND),
            ticket_count: state.ticket_count(),
            total_cost: config.cost_per_ticket() * state.ticket_count() as f64,
            running: state.is_running(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::format::format_duration;

    #[test]
    fn test_cover_odds_exactly_one_hour() {
        let d = time_to_cover_odds(3600, Duration::from_millis(1000));
        assert_eq!(d, HOUR);
        assert_eq!(format_duration(d), "1h0m0s");
    }

    #[test]
    fn test_cover_odds_seconds() {
        let d = time_to_cover_odds(10, Duration::from_millis(100));
        assert_eq!(d, SECOND);
        assert_eq!(format_duration(d), "1s");
        assert_eq!(time_to_cover_odds(3, Duration::from_millis(100)), Duration::ZERO);
    }

    #[test]
    fn test_cover_odds_rounds_to_minutes_past_an_hour() {
        // 1h 10m 29s
        let d = time_to_cover_odds(4229, Duration::from_millis(1000));
        assert_eq!(format_duration(d), "1h10m0s");
        let d = time_to_cover_odds(4230, Duration::from_millis(1000));
        assert_eq!(format_duration(d), "1h11m0s");
    }

    #[test]
    fn test_cover_odds_rounds_to_hours_past_a_day() {
        // 25_000_000 draws at 1s is 289 days and change.
        let d = time_to_cover_odds(25_000_000, Duration::from_millis(1000));
        assert_eq!(d, Duration::from_secs(6944 * 3600));
        assert_eq!(format_duration(d), "6944h0m0s");
    }

    #[test]
    fn test_cover_odds_saturates() {
        let d = time_to_cover_odds(u64::MAX, Duration::from_millis(1000));
        assert!(d > DAY);
    }
}
