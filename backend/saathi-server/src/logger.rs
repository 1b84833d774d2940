use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

fn write_line(
    out: fern::FormatCallback,
    message: &std::fmt::Arguments,
    record: &Record,
    level: &dyn std::fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Install the global logger.
///
/// Output goes to `log_file` when given (plain, appended), otherwise to
/// stdout, colored when `colored` is set. Call once, before anything logs.
pub fn initialize(
    level: saathi_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = LevelFilter::from(level);

    let dispatch = if let Some(ref log_path) = log_file {
        if let Some(dir) = log_path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ServerError::LogFile {
                path: dir.display().to_string(),
                source: e,
            })?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| ServerError::LogFile {
                path: log_path.display().to_string(),
                source: e,
            })?;

        Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, &record.level()))
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                write_line(out, message, record, &colors.color(record.level()))
            })
            .chain(std::io::stdout())
    } else {
        Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, &record.level()))
            .chain(std::io::stdout())
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", level_filter),
    }

    // Route `tracing` events from dependencies into the same sink
    tracing_log::LogTracer::init().ok();

    Ok(())
}
