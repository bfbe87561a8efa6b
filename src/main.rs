//! Lottery simulator binary.
//!
//! Logs go to stderr, and only when stderr is redirected, so they never mix
//! with the screen: `lottery 2> run.log`.

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use lottery::config::{DEFAULT_LOG_CAPACITY, DEFAULT_TITLE};
use lottery::sim::RandomDraw;
use lottery::{App, AppConfig, RuntimeConfig, Theme};
use std::io::IsTerminal;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Lottery Simulator - how long until your numbers come up?
#[derive(Parser, Debug)]
#[command(name = "lottery")]
#[command(about = "Simulate a lottery draw by draw until the winning number comes up")]
#[command(version)]
struct Cli {
    /// Number of draws kept in the scrollable log
    #[arg(long, env = "LOTTERY_LOG_CAPACITY", default_value_t = DEFAULT_LOG_CAPACITY,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    log_capacity: usize,

    /// Seed for reproducible draws
    #[arg(long, env = "LOTTERY_SEED")]
    seed: Option<u64>,

    /// Milliseconds between repaints of the running clock
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    repaint_ms: u64,

    /// Draw in the main screen instead of the alternate screen
    #[arg(long)]
    no_alt_screen: bool,

    /// Disable colors
    #[arg(long)]
    monochrome: bool,

    /// Title shown in the header
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Log filter directives, e.g. "lottery=debug"
    #[arg(long, env = "LOTTERY_LOG", default_value = "info")]
    log_filter: String,
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    if std::io::stderr().is_terminal() {
        return Ok(());
    }
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter)?;

    let draws = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded draws");
            RandomDraw::seeded(seed)
        }
        None => RandomDraw::from_entropy(),
    };

    let app_config = AppConfig {
        log_capacity: cli.log_capacity,
        title: cli.title,
        theme: if cli.monochrome {
            Theme::monochrome()
        } else {
            Theme::default()
        },
    };
    let runtime_config = RuntimeConfig {
        repaint_interval: Duration::from_millis(cli.repaint_ms),
        alternate_screen: !cli.no_alt_screen,
        ..RuntimeConfig::default()
    };

    // Real size arrives as the first resize once the terminal is up.
    let mut app = App::new(draws, app_config, 80, 24);
    lottery::run(&mut app, &runtime_config).context("terminal session failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["lottery"]).unwrap();
        assert_eq!(cli.repaint_ms, 250);
        assert_eq!(cli.title, "Lottery Simulator");
        assert!(!cli.no_alt_screen);
    }

    #[test]
    fn test_cli_rejects_zero_capacity() {
        assert!(Cli::try_parse_from(["lottery", "--log-capacity", "0"]).is_err());
    }
}
