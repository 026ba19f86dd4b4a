//! Logging bootstrap for applications using semantic loggers.
//!
//! Installs a `tracing` subscriber so that [`TracingLogger`](crate::log::TracingLogger)
//! output goes somewhere:
//! - Writes to `<directory>/<file>`, cleared on session start unless
//!   `clear_on_start` is off
//! - Optionally prints to stdout
//! - Level taken from `RUST_LOG`, falling back to the configured level

use std::fs;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging system.
///
/// Prepares the log file with [`prepare_log_file`] and sets up output to
/// the file and, if enabled, stdout. The file is opened for appending.
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log directory cannot be created, the log file
/// cannot be cleared, or a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggingGuard, io::Error> {
    prepare_log_file(settings)?;

    let file_appender = tracing_appender::rolling::never(&settings.directory, &settings.file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false); // No ANSI colors in file

    let stdout_layer = settings.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
    });

    tracing_subscriber::registry()
        .with(build_filter(&settings.level))
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and, if `clear_on_start` is set, empty the log file.
///
/// With `clear_on_start` off, existing content is kept so that short-lived
/// processes writing to the same file accumulate their output.
pub fn prepare_log_file(settings: &LoggingSettings) -> Result<(), io::Error> {
    fs::create_dir_all(&settings.directory)?;

    if settings.clear_on_start {
        // Handles both existing and non-existing files
        fs::write(settings.file_path(), "")?;
    }

    Ok(())
}

/// Build the level filter: `RUST_LOG` if set, otherwise `level`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    crate::config::DEFAULT_LOG_FILE
}
