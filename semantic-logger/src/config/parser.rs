//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::VALID_LOG_LEVELS;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
        if let Some(v) = section.get("level") {
            let v = v.trim().to_lowercase();
            if !VALID_LOG_LEVELS.contains(&v.as_str()) {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "level".to_string(),
                    value: v,
                    reason: format!("must be one of: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
            config.logging.level = v;
        }
        if let Some(v) = section.get("stdout") {
            config.logging.stdout = parse_bool(v);
        }
        if let Some(v) = section.get("clear_on_start") {
            config.logging.clear_on_start = parse_bool(v);
        }
    }

    Ok(config)
}

/// Parse a boolean value from string.
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
