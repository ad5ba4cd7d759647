//! Game configuration.
//!
//! Built from command-line flags only; no files, no environment.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::game::table::DEFAULT_COLUMN_WIDTH;

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum level written to stderr.
    pub log_level: Level,
    /// Help table column width, padding included.
    pub column_width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl GameConfig {
    /// Config with log level raised by `-v` count.
    pub fn from_verbosity(verbose: u8) -> Self {
        Self {
            log_level: level_for_verbosity(verbose),
            ..Default::default()
        }
    }

    /// Set the help table column width.
    pub fn with_column_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }
}

/// `0` WARN, `1` INFO, `2` DEBUG, `3+` TRACE.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber, writing to stderr.
///
/// stdout carries the game protocol, so logs never go there.
pub fn init_tracing(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}
