//! Simulation runner: the `Idle -> Running -> Finished` state machine.
//!
//! The runner never sleeps or spawns anything. Starting a run and handling
//! a tick both return the delay until the next tick, and the caller is
//! responsible for delivering exactly one tick after that delay. Once the
//! winning number is drawn no delay is returned, so nothing re-arms the
//! timer and the run stays finished.

use super::config::SimulationConfig;
use super::draw::DrawSource;
use super::format::format_ticket_number;
use super::stats::Statistics;
use crate::widget::{LogLine, ScrollBuffer};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Where the runner is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No configuration received yet.
    Idle,
    /// Drawing tickets.
    Running,
    /// The winning number was drawn.
    Finished,
}

/// Mutable state of one run. Created fresh for every run.
#[derive(Debug, Clone)]
pub struct SimulationState {
    winning_number: u64,
    ticket_count: u64,
    started_at: Instant,
    ended_at: Option<Instant>,
    log: ScrollBuffer,
}

impl SimulationState {
    fn new(winning_number: u64, started_at: Instant, log_capacity: usize) -> Self {
        Self {
            winning_number,
            ticket_count: 0,
            started_at,
            ended_at: None,
            log: ScrollBuffer::new(log_capacity),
        }
    }

    /// The number that ends the run when drawn.
    pub const fn winning_number(&self) -> u64 {
        self.winning_number
    }

    /// Draws performed so far.
    pub const fn ticket_count(&self) -> u64 {
        self.ticket_count
    }

    /// When the run started.
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    /// When the winning number was drawn, if it has been.
    pub const fn ended_at(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Whether the run is still drawing. False exactly when `ended_at` is set.
    pub const fn is_running(&self) -> bool {
        self.ended_at.is_none()
    }

    /// The draw log.
    pub const fn log(&self) -> &ScrollBuffer {
        &self.log
    }
}

/// What handling a tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A losing draw; deliver the next tick after `next`.
    Drawn {
        /// Delay until the next tick.
        next: Duration,
    },
    /// The winning number was drawn; no further ticks.
    Won,
    /// No run was in progress, the tick was dropped.
    Ignored,
}

/// Owns the simulation and its draw source.
#[derive(Debug)]
pub struct SimulationRunner<D> {
    draws: D,
    log_capacity: usize,
    run: Option<(SimulationConfig, SimulationState)>,
}

impl<D: DrawSource> SimulationRunner<D> {
    /// Create an idle runner.
    ///
    /// # Panics
    ///
    /// Panics if `log_capacity` is zero.
    pub fn new(draws: D, log_capacity: usize) -> Self {
        assert!(log_capacity > 0, "log capacity must be non-zero");
        Self {
            draws,
            log_capacity,
            run: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RunPhase {
        match &self.run {
            None => RunPhase::Idle,
            Some((_, state)) if state.is_running() => RunPhase::Running,
            Some(_) => RunPhase::Finished,
        }
    }

    /// Configuration of the current or last run.
    pub fn config(&self) -> Option<&SimulationConfig> {
        self.run.as_ref().map(|(config, _)| config)
    }

    /// State of the current or last run.
    pub fn state(&self) -> Option<&SimulationState> {
        self.run.as_ref().map(|(_, state)| state)
    }

    /// Statistics for the current or last run at time `now`.
    pub fn statistics(&self, now: Instant) -> Option<Statistics> {
        self.run
            .as_ref()
            .map(|(config, state)| Statistics::compute(config, state, now))
    }

    /// Mutable access to the draw log, for scrolling.
    pub fn log_mut(&mut self) -> Option<&mut ScrollBuffer> {
        self.run.as_mut().map(|(_, state)| &mut state.log)
    }

    /// Begin a new run, discarding any previous one.
    ///
    /// Returns the delay before the first tick.
    pub fn start(&mut self, config: SimulationConfig, now: Instant) -> Duration {
        let winning_number = self.draws.draw(config.chances());
        info!(
            chances = config.chances(),
            interval_ms = u64::try_from(config.interval().as_millis()).unwrap_or(u64::MAX),
            cost = config.cost_per_ticket(),
            "simulation started"
        );

        self.run = Some((
            config,
            SimulationState::new(winning_number, now, self.log_capacity),
        ));
        config.interval()
    }

    /// Handle one tick: draw a number, log it, and decide whether to go on.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some((config, state)) = self.run.as_mut() else {
            debug!("tick with no run in progress");
            return TickOutcome::Ignored;
        };
        if !state.is_running() {
            debug!("tick after the run finished");
            return TickOutcome::Ignored;
        }

        let chances = config.chances();
        let number = self.draws.draw(chances);
        state.ticket_count += 1;
        let winning = number == state.winning_number;

        state.log.push(LogLine {
            ticket: format!("Ticket #{} - ", format_ticket_number(state.ticket_count, chances)),
            number: format_ticket_number(number, chances),
            winning,
        });
        debug!(ticket = state.ticket_count, number, "ticket drawn");

        if winning {
            state.ended_at = Some(now);
            info!(
                tickets = state.ticket_count,
                winning_number = state.winning_number,
                "winning number drawn"
            );
            TickOutcome::Won
        } else {
            TickOutcome::Drawn {
                next: config.interval(),
            }
        }
    }
}
