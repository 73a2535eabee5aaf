//! Logger setup: normal output goes through `log::info!` to stdout.

use std::fmt;
use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Pick the level filter from the global `--quiet` / `--verbose` flags.
///
/// `--quiet` wins when both are given.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Render one log record, without timestamp or trailing newline.
///
/// Info lines are printed bare so they read as program output. Warnings
/// and errors get a coloured prefix.
pub(crate) fn render_line(level: Level, message: impl fmt::Display) -> String {
    match level {
        Level::Info => message.to_string(),
        Level::Warn => format!(
            "{} {}",
            "warning:".if_supports_color(Stdout, |t| t.yellow()),
            message,
        ),
        Level::Error => format!(
            "{} {}",
            "error:".if_supports_color(Stdout, |t| t.red()),
            message,
        ),
        Level::Debug | Level::Trace => format!("[{}] {}", level, message)
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string(),
    }
}

/// Install the global logger. Verbose mode adds timestamps.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = level_for(quiet, verbose);

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                write!(buf, "{} ", buf.timestamp())?;
            }
            writeln!(buf, "{}", render_line(record.level(), record.args()))
        })
        .init();
}
