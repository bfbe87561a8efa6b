//! Text: Styled spans and lines, measured in terminal columns.

use super::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text content.
    pub content: String,
    /// Style applied to the whole run.
    pub style: Style,
}

impl Span {
    /// Create a styled span.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Create an unstyled span.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::styled(content, Style::PLAIN)
    }

    /// Display width in columns.
    pub fn width(&self) -> usize {
        self.content.width()
    }
}

/// One row of styled text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// Spans in display order.
    pub spans: Vec<Span>,
}

impl Line {
    /// An empty line.
    pub const fn empty() -> Self {
        Self { spans: Vec::new() }
    }

    /// Create a line from spans.
    pub const fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Create a single-span line.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
        }
    }

    /// Append a span.
    #[must_use]
    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Display width in columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Plain text content with styling dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }

    /// Cut the line down to at most `max_width` columns.
    ///
    /// Cuts happen on grapheme boundaries; a wide grapheme that would
    /// straddle the limit is dropped entirely.
    #[must_use]
    pub fn truncated(&self, max_width: usize) -> Self {
        let mut remaining = max_width;
        let mut spans = Vec::with_capacity(self.spans.len());

        for span in &self.spans {
            if remaining == 0 {
                break;
            }
            if span.width() <= remaining {
                remaining -= span.width();
                spans.push(span.clone());
                continue;
            }

            let mut content = String::new();
            for grapheme in span.content.graphemes(true) {
                let w = grapheme.width();
                if w > remaining {
                    break;
                }
                remaining -= w;
                content.push_str(grapheme);
            }
            spans.push(Span::styled(content, span.style));
            break;
        }

        Self { spans }
    }

    /// Center the line within `width` columns by left-padding with spaces.
    #[must_use]
    pub fn centered(mut self, width: usize) -> Self {
        let pad = width.saturating_sub(self.width()) / 2;
        if pad > 0 {
            self.spans.insert(0, Span::raw(" ".repeat(pad)));
        }
        self
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::styled(text, Style::PLAIN)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::styled(text, Style::PLAIN)
    }
}
