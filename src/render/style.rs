//! Style: Colors and text modifiers for rendered spans.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF06B7).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Approximate an entry of the xterm 256-color palette.
    ///
    /// Entries 0-15 map to the usual VGA-ish system colors, 16-231 to the
    /// 6x6x6 cube and 232-255 to the grayscale ramp.
    pub const fn from_ansi256(index: u8) -> Self {
        const SYSTEM: [u32; 16] = [
            0x00_0000, 0x80_0000, 0x00_8000, 0x80_8000, 0x00_0080, 0x80_0080, 0x00_8080, 0xC0_C0C0,
            0x80_8080, 0xFF_0000, 0x00_FF00, 0xFF_FF00, 0x00_00FF, 0xFF_00FF, 0x00_FFFF, 0xFF_FFFF,
        ];
        const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

        match index {
            0..=15 => Self::from_u32(SYSTEM[index as usize]),
            16..=231 => {
                let i = index - 16;
                Self::new(
                    LEVELS[(i / 36) as usize],
                    LEVELS[((i / 6) % 6) as usize],
                    LEVELS[(i % 6) as usize],
                )
            }
            _ => {
                let level = 8 + (index - 232) * 10;
                Self::new(level, level, level)
            }
        }
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use lottery::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::BLINK;
    /// assert!(style.contains(Modifiers::BLINK));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Foreground, background and modifiers applied to a span.
///
/// `None` colors fall through to the terminal's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// The terminal's default style.
    pub const PLAIN: Self = Self {
        fg: None,
        bg: None,
        modifiers: Modifiers::empty(),
    };

    /// A style with only a foreground color.
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the background color.
    #[must_use]
    pub const fn with_bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_u32(0xFF06B7), Rgb::new(0xFF, 0x06, 0xB7));
        assert_eq!(Rgb::from(0x767676), Rgb::new(0x76, 0x76, 0x76));
    }

    #[test]
    fn test_ansi256_palette() {
        assert_eq!(Rgb::from_ansi256(12), Rgb::new(0, 0, 255));
        // 86 = cube (1, 5, 4)
        assert_eq!(Rgb::from_ansi256(86), Rgb::new(95, 255, 215));
        // 33 = cube (0, 2, 5)
        assert_eq!(Rgb::from_ansi256(33), Rgb::new(0, 135, 255));
        assert_eq!(Rgb::from_ansi256(232), Rgb::new(8, 8, 8));
        assert_eq!(Rgb::from_ansi256(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Rgb::WHITE)
            .with_bg(Rgb::BLACK)
            .with_modifiers(Modifiers::BOLD)
            .with_modifiers(Modifiers::BLINK);
        assert_eq!(style.fg, Some(Rgb::WHITE));
        assert_eq!(style.bg, Some(Rgb::BLACK));
        assert_eq!(style.modifiers, Modifiers::BOLD | Modifiers::BLINK);
    }
}
