//! Configuration for the application shell and the runtime loop.

use crate::render::Theme;
use std::time::Duration;

/// Default number of draws kept in the log.
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// Default header title.
pub const DEFAULT_TITLE: &str = "Lottery Simulator";

/// Settings for the [`App`](crate::App).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Draws retained in the scrollable log.
    pub log_capacity: usize,
    /// Title shown in the header.
    pub title: String,
    /// Colors and modifiers.
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_LOG_CAPACITY,
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
        }
    }
}

/// Settings for the terminal and the main loop.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// How long the input thread waits for an event before checking for shutdown.
    pub input_poll_timeout: Duration,
    /// Period of the repaint signal.
    pub repaint_interval: Duration,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            repaint_interval: Duration::from_millis(250),
            alternate_screen: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let app = AppConfig::default();
        assert_eq!(app.log_capacity, 100);
        assert_eq!(app.title, "Lottery Simulator");

        let runtime = RuntimeConfig::default();
        assert_eq!(runtime.repaint_interval, Duration::from_millis(250));
        assert!(runtime.alternate_screen);
    }
}
