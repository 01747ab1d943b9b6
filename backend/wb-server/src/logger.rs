use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::{self, Display};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Installs the process-wide logger.
///
/// Lines go to `log_file` when one is configured (appended, parent
/// directories created) and to stdout otherwise. `colored` only affects
/// stdout.
pub fn initialize(
    log_level: wb_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let base = Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn);

    let dispatch = match &log_file {
        Some(path) => base
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(open_log_file(path)?),
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            base.format(move |out, message, record| {
                write_line(out, message, record, colors.color(record.level()))
            })
            .chain(std::io::stdout())
        }
        None => base
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("logger already installed: {e}"),
    })?;

    match &log_file {
        Some(path) => info!("Logging at {:?} to {}", level_filter, path.display()),
        None => info!("Logging at {:?} to stdout", level_filter),
    }

    // Route tracing events (tower-http, sqlx spans) into the same sink.
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// `<rfc3339> <LEVEL> <module> <message> (<file>:<line>)`
fn write_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl Display,
) {
    out.finish(format_args!(
        "{} {} {} {} ({}:{})",
        humantime::format_rfc3339_millis(SystemTime::now()),
        level,
        record.target(),
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

pub(crate) fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("cannot open log file {}: {}", path.display(), e),
        })
}
