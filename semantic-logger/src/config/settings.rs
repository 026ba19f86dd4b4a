//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory the log file is written to
    pub directory: PathBuf,
    /// Log file name inside `directory`
    pub file: String,
    /// Level filter used when `RUST_LOG` is not set
    pub level: String,
    /// Also print log output to stdout
    pub stdout: bool,
    /// Empty the log file when logging is initialized
    pub clear_on_start: bool,
}

impl LoggingSettings {
    /// Full path of the log file.
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file)
    }
}
