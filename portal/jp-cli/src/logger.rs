use crate::{CliError, CliResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, debug};

/// Where log records end up
enum Sink {
    /// Appended, plain, with source location
    File(PathBuf),
    /// stderr, so stdout carries only command output
    Stderr { colored: bool },
}

/// Install the global fern dispatcher.
///
/// `log_file` wins over stderr; colors only apply to stderr.
#[track_caller]
pub fn initialize(
    log_level: jp_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter: LevelFilter = *log_level;
    let sink = match log_file {
        Some(path) => Sink::File(path),
        None => Sink::Stderr { colored },
    };

    let output = match &sink {
        Sink::File(path) => {
            let file = fern::log_file(path).map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
            })?;
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {}",
                        prefix(record.level(), message),
                        location(record)
                    ))
                })
                .chain(file)
        }
        Sink::Stderr { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{} {}",
                        prefix(colors.color(record.level()), message),
                        location(record)
                    ))
                })
                .chain(std::io::stderr())
        }
        Sink::Stderr { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", prefix(record.level(), message)))
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match sink {
        Sink::File(path) => debug!("Logging at {level_filter} to {}", path.display()),
        Sink::Stderr { .. } => debug!("Logging at {level_filter} to stderr"),
    }

    Ok(())
}

fn prefix(level: impl std::fmt::Display, message: &std::fmt::Arguments) -> String {
    format!(
        "[{} - {level}] {message}",
        humantime::format_rfc3339_seconds(SystemTime::now())
    )
}

fn location(record: &Record) -> String {
    format!(
        "[{}:{}]",
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0)
    )
}
