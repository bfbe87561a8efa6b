//! Scroll buffer: Ring buffer for the draw log.
//!
//! Holds the most recent log lines up to a fixed capacity, oldest first,
//! with O(1) append and a scroll offset measured from the newest line.

use std::collections::VecDeque;

/// One formatted entry in the draw log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// The ticket label, e.g. `Ticket #007 - `.
    pub ticket: String,
    /// The drawn number, zero-padded.
    pub number: String,
    /// Whether this draw hit the winning number.
    pub winning: bool,
}

/// Suffix appended to the winning draw.
pub const WINNING_MARKER: &str = " >>>> Winning!";

impl LogLine {
    /// The full line as plain text.
    pub fn text(&self) -> String {
        let marker = if self.winning { WINNING_MARKER } else { "" };
        format!("{}{}{marker}", self.ticket, self.number)
    }
}

/// Ring buffer for storing log lines with scrollback.
///
/// The scroll buffer keeps at most `max_lines` lines in memory,
/// discarding the oldest when capacity is exceeded.
#[derive(Debug, Clone)]
pub struct ScrollBuffer {
    /// Lines stored in the buffer, oldest first.
    lines: VecDeque<LogLine>,
    /// Maximum number of lines to retain.
    max_lines: usize,
    /// Current scroll offset from the bottom (0 = at bottom).
    scroll_offset: usize,
}

impl ScrollBuffer {
    /// Create a new scroll buffer with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `max_lines` is zero.
    pub fn new(max_lines: usize) -> Self {
        assert!(max_lines > 0, "scroll buffer capacity must be non-zero");
        Self {
            lines: VecDeque::with_capacity(max_lines),
            max_lines,
            scroll_offset: 0,
        }
    }

    /// Get the total number of lines in the buffer.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Maximum number of lines retained.
    pub const fn capacity(&self) -> usize {
        self.max_lines
    }

    /// Append a line, evicting the oldest if the buffer is full.
    ///
    /// A scrolled-up view stays on the lines it was showing.
    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() >= self.max_lines {
            self.lines.pop_front();
        }
        self.lines.push_back(line);

        // The offset counts from the newest line, so it follows every push.
        if self.scroll_offset > 0 {
            self.scroll_offset += 1;
        }
        self.clamp_offset();
    }

    /// Get a line by index from the top (oldest) of the buffer.
    pub fn get(&self, index: usize) -> Option<&LogLine> {
        self.lines.get(index)
    }

    /// The newest line.
    pub fn last(&self) -> Option<&LogLine> {
        self.lines.back()
    }

    /// All lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    /// Get visible lines for a given viewport height.
    ///
    /// Returns the lines that should be visible, oldest first,
    /// accounting for scroll offset.
    pub fn visible_lines(&self, viewport_height: usize) -> impl Iterator<Item = &LogLine> {
        let total = self.lines.len();
        let end = total.saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(viewport_height);

        self.lines.range(start..end)
    }

    /// Scroll up (towards older lines) by the given number of lines.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.clamp_offset();
    }

    /// Scroll down (towards newer lines) by the given number of lines.
    pub const fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll to the bottom (latest content).
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Check if we're scrolled to the bottom.
    pub const fn at_bottom(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Current scroll offset from the newest line.
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn clamp_offset(&mut self) {
        let max_offset = self.lines.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
