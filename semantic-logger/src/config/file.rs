//! Configuration file handling for ~/.semantic-logger/config.ini.
//!
//! Settings structs live in [`super::settings`], defaults in
//! [`super::defaults`], parsing in [`super::parser`] and serialization in
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.semantic-logger/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, self.to_config_string())
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Render the configuration as commented INI text.
    pub fn to_config_string(&self) -> String {
        super::writer::to_config_string(self)
    }
}

/// Get the path to the config directory (~/.semantic-logger).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".semantic-logger")
}

/// Get the path to the config file (~/.semantic-logger/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&temp.path().join("absent.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.logging.directory = PathBuf::from("/var/log/app");
        config.logging.file = "app.log".to_string();
        config.logging.level = "debug".to_string();
        config.logging.stdout = false;
        config.logging.clear_on_start = false;

        config.save_to(&path).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[logging]\nlevel = loud\n").unwrap();

        let err = ConfigFile::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "level"));
        assert!(err.to_string().contains("logging.level = 'loud'"));
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with(".semantic-logger/config.ini"));
    }
}
