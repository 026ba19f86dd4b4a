//! Configuration for the logging bootstrap.
//!
//! Settings are read from an INI file, `~/.semantic-logger/config.ini` by
//! default. A missing file is not an error; defaults apply instead.
//!
//! # Example
//!
//! ```
//! use semantic_logger::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.logging.level, "info");
//! assert!(config.logging.stdout);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, VALID_LOG_LEVELS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings};
