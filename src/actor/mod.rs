//! Actor Model: the threads and timers feeding the main loop.
//!
//! - **Input Actor**: polls terminal events, forwards them over a channel
//! - **Ticker Actor**: free-running repaint signal
//! - **Tick Timer**: one-shot draw timer, re-armed by each draw
//! - **Main Loop**: `select!`s over all three and owns every piece of state
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐      Repaint        │  Main Loop   │
//! │Ticker Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐   one-shot Tick     │              │
//! │  Tick Timer  │ ─────────────────▶  │              │
//! └──────────────┘ ◀───── re-arm ───── └──────────────┘
//! ```

mod input;
mod messages;
mod ticker;
mod timer;

pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
pub use ticker::{Repaint, TickerActor};
pub use timer::TickTimer;
