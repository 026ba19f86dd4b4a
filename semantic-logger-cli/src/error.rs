//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use semantic_logger::config::ConfigFileError;
use semantic_logger::DeadlineError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Deadline could not be parsed
    Deadline(DeadlineError),
    /// A command line option has an unusable value
    InvalidArgument {
        option: &'static str,
        value: String,
        reason: String,
    },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Deadline(_) | CliError::InvalidArgument { .. } => {
                eprintln!();
                eprintln!("Deadlines are calendar dates in ISO format, for example:");
                eprintln!("  semlog remind 2018-10-23 \"Remove the legacy importer\"");
            }
            CliError::LoggingInit(_) => {
                eprintln!();
                eprintln!("Check that the [logging] directory in the config file is writable.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Deadline(e) => write!(f, "{}", e),
            CliError::InvalidArgument {
                option,
                value,
                reason,
            } => write!(f, "Invalid value '{}' for {}: {}", value, option, reason),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Deadline(e) => Some(e),
            CliError::LoggingInit(_) | CliError::InvalidArgument { .. } => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<DeadlineError> for CliError {
    fn from(e: DeadlineError) -> Self {
        CliError::Deadline(e)
    }
}
