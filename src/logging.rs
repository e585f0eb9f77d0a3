//! Logger configuration.
//!
//! Resolves silence, verbosity and color from command-line flags, the
//! `NO_COLOR` environment variable and terminal detection, then initializes
//! the `env_logger` backend. Command-line flags beat the environment, which
//! beats auto-detection.

use std::env;
use std::io::IsTerminal;

use env_logger::WriteStyle;

/// Environment variable that disables colored output when set to `1`.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Resolved logger settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub silence: bool,
    pub colored: bool,
    pub verbose: bool,
}

impl LoggerConfig {
    /// Resolve logger settings from command-line flags.
    pub fn new(silence: bool, no_color_flag: bool, color_flag: bool, verbose: bool) -> Self {
        Self {
            silence,
            colored: resolve_color(no_color_flag, color_flag),
            verbose,
        }
    }
}

fn resolve_color(no_color_flag: bool, color_flag: bool) -> bool {
    // command line
    if no_color_flag {
        return false;
    }
    if color_flag {
        return true;
    }

    // environment variable
    if env::var(NO_COLOR_ENV).is_ok_and(|v| v == "1") {
        return false;
    }

    // auto: color only when stdout is a terminal
    std::io::stdout().is_terminal()
}

/// Initialize the global logger.
///
/// Silence skips initialization entirely, leaving the log macros as no-ops.
/// Verbose selects debug level with the detailed default format; otherwise
/// info level with level and message only.
pub fn configure(config: &LoggerConfig) {
    if config.silence {
        return;
    }

    let default_level = if config.verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    builder.write_style(if config.colored {
        WriteStyle::Always
    } else {
        WriteStyle::Never
    });
    if !config.verbose {
        builder.format_timestamp(None);
        builder.format_target(false);
    }
    builder.init();
}
