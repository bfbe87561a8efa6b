//! Theme: Rendering parameters passed to every view.

use super::style::{Modifiers, Rgb, Style};

/// Hot pink used for titles and form labels.
pub const HOT_PINK: Rgb = Rgb::from_u32(0xFF06B7);
/// Dark gray used for hints and placeholders.
pub const DARK_GRAY: Rgb = Rgb::from_u32(0x767676);
/// Subtle gray used for rules and borders.
pub const SUBTLE: Rgb = Rgb::from_u32(0x383838);

/// Colors and modifiers for every piece of chrome the views draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Header title.
    pub title: Style,
    /// Rules under the header and between stat groups.
    pub rule: Style,
    /// Form field labels.
    pub input_label: Style,
    /// Form field text.
    pub input_text: Style,
    /// Placeholder shown in an empty field.
    pub placeholder: Style,
    /// Cursor cell in the focused field.
    pub cursor: Style,
    /// "Continue ->" hint.
    pub hint: Style,
    /// Validation error message.
    pub error: Style,
    /// Statistic label (e.g. "Chances: ").
    pub stat_label: Style,
    /// Statistic value.
    pub stat_value: Style,
    /// "Ticket #0001 - " part of a log line.
    pub log_ticket: Style,
    /// Drawn number part of a log line.
    pub log_draw: Style,
    /// Winning marker.
    pub winning: Style,
    /// Key name in the help bar.
    pub help_key: Style,
    /// Key description in the help bar.
    pub help_desc: Style,
    /// Separator in the vertical border next to the log panel.
    pub log_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::fg(HOT_PINK).with_modifiers(Modifiers::BOLD),
            rule: Style::fg(SUBTLE),
            input_label: Style::fg(HOT_PINK),
            input_text: Style::PLAIN,
            placeholder: Style::fg(DARK_GRAY),
            cursor: Style::PLAIN.with_modifiers(Modifiers::REVERSED),
            hint: Style::fg(DARK_GRAY),
            error: Style::fg(Rgb::from_ansi256(203)).with_modifiers(Modifiers::BOLD),
            stat_label: Style::fg(Rgb::from_ansi256(86)),
            stat_value: Style::fg(Rgb::from_ansi256(33)),
            log_ticket: Style::fg(Rgb::from_ansi256(77)),
            log_draw: Style::fg(Rgb::from_ansi256(12)),
            winning: Style::fg(Rgb::from_ansi256(99)).with_modifiers(Modifiers::BLINK),
            help_key: Style::fg(Rgb::from_ansi256(245)),
            help_desc: Style::fg(Rgb::from_ansi256(240)),
            log_border: Style::fg(SUBTLE),
        }
    }
}

impl Theme {
    /// A theme without any colors, for terminals that lack them and for
    /// comparing rendered text in tests.
    pub fn monochrome() -> Self {
        Self {
            title: Style::PLAIN.with_modifiers(Modifiers::BOLD),
            rule: Style::PLAIN,
            input_label: Style::PLAIN,
            input_text: Style::PLAIN,
            placeholder: Style::PLAIN.with_modifiers(Modifiers::DIM),
            cursor: Style::PLAIN.with_modifiers(Modifiers::REVERSED),
            hint: Style::PLAIN.with_modifiers(Modifiers::DIM),
            error: Style::PLAIN.with_modifiers(Modifiers::BOLD),
            stat_label: Style::PLAIN,
            stat_value: Style::PLAIN,
            log_ticket: Style::PLAIN,
            log_draw: Style::PLAIN,
            winning: Style::PLAIN.with_modifiers(Modifiers::BOLD),
            help_key: Style::PLAIN,
            help_desc: Style::PLAIN.with_modifiers(Modifiers::DIM),
            log_border: Style::PLAIN,
        }
    }
}
