//! Frame: Pre-formatted text blocks placed on screen.

use super::rect::Rect;
use super::text::Line;

/// Lines of text to be drawn inside an area.
///
/// Lines past the bottom of the area are not drawn; rows past the last line
/// are painted blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Where to draw.
    pub area: Rect,
    /// What to draw, top to bottom.
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block.
    pub const fn new(area: Rect, lines: Vec<Line>) -> Self {
        Self { area, lines }
    }
}

/// Everything visible on one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Terminal width the frame was laid out for.
    pub width: u16,
    /// Terminal height the frame was laid out for.
    pub height: u16,
    /// Blocks in paint order.
    pub blocks: Vec<Block>,
}

impl Frame {
    /// Create an empty frame for a terminal of the given size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            blocks: Vec::new(),
        }
    }

    /// Add a block. Empty areas are skipped.
    pub fn push(&mut self, area: Rect, lines: Vec<Line>) {
        if !area.is_empty() {
            self.blocks.push(Block::new(area, lines));
        }
    }

    /// Plain text of the whole frame, one string per terminal row.
    ///
    /// Used to assert on rendered output without a terminal.
    pub fn to_text(&self) -> Vec<String> {
        let mut rows: Vec<Vec<char>> =
            vec![vec![' '; usize::from(self.width)]; usize::from(self.height)];

        for block in &self.blocks {
            for (offset, line) in block.lines.iter().take(usize::from(block.area.height)).enumerate() {
                let y = usize::from(block.area.y) + offset;
                let Some(row) = rows.get_mut(y) else { break };
                let text = line.truncated(usize::from(block.area.width)).text();
                for (i, c) in text.chars().enumerate() {
                    if let Some(cell) = row.get_mut(usize::from(block.area.x) + i) {
                        *cell = c;
                    }
                }
            }
        }

        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_text() {
        let mut frame = Frame::new(20, 3);
        frame.push(Rect::new(0, 0, 20, 1), vec![Line::from("header")]);
        frame.push(Rect::new(2, 1, 5, 2), vec![Line::from("left side"), Line::from("x")]);
        frame.push(Rect::new(10, 1, 0, 2), vec![Line::from("skipped")]);

        assert_eq!(frame.blocks.len(), 2);
        assert_eq!(frame.to_text(), vec!["header", "  left", "  x"]);
    }
}
