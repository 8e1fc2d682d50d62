use crate::error::{Result as ServerErrorResult, ServerError};

use amity_config::LogLevel;

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::{
    Dispatch, FormatCallback,
    colors::{Color, ColoredLevelConfig},
};
use log::{LevelFilter, Record};

/// Where log lines go.
enum Sink {
    File(std::fs::File),
    ColoredStdout(ColoredLevelConfig),
    PlainStdout,
}

/// Install the global `fern` logger.
///
/// Output goes to `log_file` when set (never colored), otherwise to stdout.
/// sqlx emits `tracing` events; they are bridged into `log` and capped at
/// `warn` so statements are not echoed at `info`.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = LevelFilter::from(log_level);

    let sink = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::LogFile {
                    path: path.display().to_string(),
                    source: e,
                })?;
            Sink::File(file)
        }
        None if colored => Sink::ColoredStdout(
            ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red),
        ),
        // Plain output for non-TTY (systemd, docker logs)
        None => Sink::PlainStdout,
    };

    let dispatch = Dispatch::new()
        .level(level_filter)
        .level_for("sqlx", LevelFilter::Warn);

    let dispatch = match sink {
        Sink::File(file) => dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(file),
        Sink::ColoredStdout(colors) => dispatch
            .format(move |out, message, record| {
                write_line(out, colors.color(record.level()), message, record)
            })
            .chain(std::io::stdout()),
        Sink::PlainStdout => dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(ref path) => log::info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => log::info!("Logger initialized: level={}, stdout", level_filter),
    }

    // Bridge tracing (sqlx) to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// `[<rfc3339> - LEVEL] message [file:line]`
fn write_line(out: FormatCallback, level: impl Display, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
