//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use super::frame::{Block, Frame};
use super::style::{Modifiers, Rgb, Style};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A whole frame is accumulated here, then flushed in a single `write()`
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        let _ = write!(self.data, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Enable text modifiers.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        const SGR: [(Modifiers, &[u8]); 6] = [
            (Modifiers::BOLD, b"\x1b[1m"),
            (Modifiers::DIM, b"\x1b[2m"),
            (Modifiers::ITALIC, b"\x1b[3m"),
            (Modifiers::UNDERLINE, b"\x1b[4m"),
            (Modifiers::BLINK, b"\x1b[5m"),
            (Modifiers::REVERSED, b"\x1b[7m"),
        ];

        for (flag, seq) in SGR {
            if modifiers.contains(flag) {
                self.data.extend_from_slice(seq);
            }
        }
    }

    /// Apply a full style, starting from a reset.
    pub fn set_style(&mut self, style: Style) {
        self.reset_attrs();
        if let Some(fg) = style.fg {
            self.set_fg(fg);
        }
        if let Some(bg) = style.bg {
            self.set_bg(bg);
        }
        self.set_modifiers(style.modifiers);
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Paint one block, padding every row to the block width so stale
    /// content from the previous frame is overwritten.
    pub fn paint_block(&mut self, block: &Block) {
        let width = usize::from(block.area.width);

        for row in 0..block.area.height {
            self.cursor_move(block.area.x, block.area.y + row);

            let mut used = 0;
            if let Some(line) = block.lines.get(usize::from(row)) {
                let line = line.truncated(width);
                for span in &line.spans {
                    self.set_style(span.style);
                    self.write_str(&span.content);
                    used += span.width();
                }
                self.reset_attrs();
            }

            if used < width {
                self.write_str(&" ".repeat(width - used));
            }
        }
    }

    /// Paint a whole frame.
    ///
    /// With `clear` set the screen is wiped first, which is needed after a
    /// resize when old content may sit outside every new block.
    pub fn paint(&mut self, frame: &Frame, clear: bool) {
        self.cursor_hide();
        if clear {
            self.reset_attrs();
            self.clear_screen();
        }
        for block in &frame.blocks {
            self.paint_block(block);
        }
        self.reset_attrs();
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rect::Rect;
    use crate::render::text::{Line, Span};

    #[test]
    fn test_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        out.cursor_move(10, 5);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H\x1b[6;11H");
    }

    #[test]
    fn test_set_style() {
        let mut out = OutputBuffer::new();
        out.set_style(Style::fg(Rgb::new(1, 2, 3)).with_modifiers(Modifiers::BOLD | Modifiers::BLINK));
        assert_eq!(out.as_bytes(), b"\x1b[0m\x1b[38;2;1;2;3m\x1b[1m\x1b[5m");
    }

    #[test]
    fn test_paint_block_pads_rows() {
        let mut out = OutputBuffer::new();
        let block = Block::new(
            Rect::new(0, 0, 6, 2),
            vec![Line::from_spans(vec![Span::raw("abcdefgh")])],
        );
        out.paint_block(&block);

        let text = String::from_utf8(out.as_bytes().to_vec()).unwrap();
        assert!(text.starts_with("\x1b[1;1H\x1b[0mabcdef\x1b[0m"));
        assert!(text.ends_with("\x1b[2;1H      "));
    }

    #[test]
    fn test_flush_to_writer() {
        let mut out = OutputBuffer::new();
        out.write_str("hello");
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hello");

        out.clear();
        assert!(out.is_empty());
    }
}
