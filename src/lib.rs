//! # Lottery
//!
//! A terminal lottery simulator: set the odds, watch the draws, count the cost.
//!
//! ## Core Concepts
//!
//! - **Two machines**: a configuration form and a simulation runner, switched
//!   by a single "configuration accepted" message
//! - **One-shot draw timer**: each draw schedules the next, so draws never
//!   overlap and stop exactly on the winning number
//! - **Bounded log**: the most recent draws in a scrollable ring buffer
//! - **Actor model**: input and repaint threads feeding a single-threaded loop
//!
//! ## Example
//!
//! ```rust
//! use lottery::sim::{ScriptedDraw, SimulationConfig, SimulationRunner, TickOutcome};
//! use std::time::Instant;
//!
//! // Winning number 2, then draws 3, 7, 2.
//! let mut runner = SimulationRunner::new(ScriptedDraw::new([2, 3, 7, 2]), 100);
//! let now = Instant::now();
//! runner.start(SimulationConfig::from_millis(10, 0, 1.0), now);
//!
//! while runner.tick(now) != TickOutcome::Won {}
//! assert_eq!(runner.state().map(|s| s.ticket_count()), Some(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod runtime;
pub mod sim;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{InputEvent, KeyCode, KeyModifiers};
pub use app::{App, Command, Message};
pub use config::{AppConfig, RuntimeConfig};
pub use error::ValidationError;
pub use form::{ConfigForm, FieldKind};
pub use render::{Frame, Line, Modifiers, Rgb, Span, Style, Theme};
pub use runtime::{dispatch, run, Flow, Scheduler};
pub use sim::{RandomDraw, RunPhase, SimulationConfig, SimulationRunner, Statistics};
pub use widget::ScrollBuffer;
