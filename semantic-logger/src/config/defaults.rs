//! Default values for all configuration settings.

use std::path::PathBuf;

use super::settings::LoggingSettings;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "semantic-logger.log";

/// Default level filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Level names accepted for `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Default log directory, relative to the working directory.
pub fn default_log_directory() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: DEFAULT_LOG_FILE.to_string(),
            level: DEFAULT_LOG_LEVEL.to_string(),
            stdout: true,
            clear_on_start: true,
        }
    }
}
