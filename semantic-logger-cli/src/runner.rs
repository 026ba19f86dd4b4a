//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and logger creation
//! so that command handlers only deal with their own arguments.

use std::path::Path;

use semantic_logger::config::ConfigFile;
use semantic_logger::logging::{init_logging, LoggingGuard};
use semantic_logger::{SemanticLogger, SemanticLoggerFactory};
use tracing::debug;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to use instead of the default location
    ///
    /// Each invocation appends to the log file; `clear_on_start` from the
    /// config is ignored, since a single run emits only one message.
    pub fn new(config_path: Option<&Path>) -> Result<Self, CliError> {
        let mut config = load_config(config_path)?;
        config.logging.clear_on_start = false;

        let logging_guard =
            init_logging(&config.logging).map_err(|e| CliError::LoggingInit(e.to_string()))?;

        debug!(
            log_file = %config.logging.file_path().display(),
            level = %config.logging.level,
            "Logging initialized"
        );

        Ok(Self { logging_guard })
    }

    /// Semantic logger with the given name.
    pub fn logger(&self, name: &str) -> SemanticLogger {
        SemanticLoggerFactory::get_logger(name)
    }
}

/// Load config from `path`, or from the default location when `None`.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}
