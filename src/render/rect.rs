//! Rect: A rectangle primitive for layout calculations.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink by `horizontal` columns on the left and right and
    /// `vertical` rows on the top and bottom.
    #[inline]
    #[must_use]
    pub const fn inset(&self, horizontal: u16, vertical: u16) -> Self {
        let h2 = horizontal.saturating_mul(2);
        let v2 = vertical.saturating_mul(2);
        if self.width <= h2 || self.height <= v2 {
            return Self::ZERO;
        }
        Self::new(
            self.x + horizontal,
            self.y + vertical,
            self.width - h2,
            self.height - v2,
        )
    }

    /// Split horizontally at a given column offset.
    pub fn split_horizontal(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.width);
        (
            Self::new(self.x, self.y, at, self.height),
            Self::new(self.x + at, self.y, self.width - at, self.height),
        )
    }

    /// Split vertically at a given row offset.
    pub fn split_vertical(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(self.x, self.y + at, self.width, self.height - at),
        )
    }

    /// Split off `rows` rows from the bottom.
    pub fn split_bottom(&self, rows: u16) -> (Self, Self) {
        self.split_vertical(self.height.saturating_sub(rows))
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_vertical() {
        let (top, rest) = Rect::from_size(80, 24).split_vertical(4);
        assert_eq!(top, Rect::new(0, 0, 80, 4));
        assert_eq!(rest, Rect::new(0, 4, 80, 20));
    }

    #[test]
    fn test_split_clamps() {
        let (left, right) = Rect::new(2, 1, 10, 5).split_horizontal(40);
        assert_eq!(left, Rect::new(2, 1, 10, 5));
        assert!(right.is_empty());

        let (body, footer) = Rect::from_size(80, 1).split_bottom(3);
        assert!(body.is_empty());
        assert_eq!(footer.height, 1);
    }

    #[test]
    fn test_inset() {
        assert_eq!(Rect::from_size(80, 24).inset(2, 1), Rect::new(2, 1, 76, 22));
        assert_eq!(Rect::from_size(3, 3).inset(2, 0), Rect::ZERO);
    }
}
