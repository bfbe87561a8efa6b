//! Widgets: reusable building blocks with their own state.
//!
//! - [`ScrollBuffer`]: bounded, scrollable history of log lines
//! - [`TextInput`]: single-line editable text with a cursor

mod scroll_buffer;
mod text_input;

pub use scroll_buffer::{LogLine, ScrollBuffer, WINNING_MARKER};
pub use text_input::{Edit, TextInput};
