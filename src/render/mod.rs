//! Render module: The text model every view produces and the painter that
//! puts it on screen.
//!
//! Views never touch the terminal. They return a [`Frame`]: a flat list of
//! [`Block`]s, each a rectangle of pre-formatted [`Line`]s. The
//! [`OutputBuffer`] turns a frame into ANSI sequences flushed in one write.

mod frame;
mod output;
mod rect;
mod style;
mod text;
mod theme;

pub use frame::{Block, Frame};
pub use output::OutputBuffer;
pub use rect::Rect;
pub use style::{Modifiers, Rgb, Style};
pub use text::{Line, Span};
pub use theme::{Theme, DARK_GRAY, HOT_PINK, SUBTLE};
