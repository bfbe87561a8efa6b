//! Simulation: configuration, draw sources, the runner state machine and
//! the statistics derived from it.

mod config;
mod draw;
mod format;
mod runner;
mod stats;
mod view;

pub use config::SimulationConfig;
pub use draw::{DrawSource, RandomDraw, ScriptedDraw};
pub use format::{digit_count, format_duration, format_money, format_ticket_number, round_duration};
pub use runner::{RunPhase, SimulationRunner, SimulationState, TickOutcome};
pub use stats::{time_to_cover_odds, Statistics};
pub use view::{log_lines, statistics_lines};
