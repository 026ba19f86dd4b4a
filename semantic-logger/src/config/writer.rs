//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::defaults::VALID_LOG_LEVELS;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let logging = &config.logging;
    format!(
        r#"# semantic-logger configuration

[logging]
# Directory the log file is written to
directory = {directory}
# Log file name inside directory
file = {file}
# Level used when RUST_LOG is not set ({levels})
level = {level}
# Also print log output to stdout
stdout = {stdout}
# Empty the log file each time logging starts
clear_on_start = {clear_on_start}
"#,
        directory = path_to_string(&logging.directory),
        file = logging.file,
        levels = VALID_LOG_LEVELS.join(", "),
        level = logging.level,
        stdout = logging.stdout,
        clear_on_start = logging.clear_on_start,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_logging_section() {
        let text = to_config_string(&ConfigFile::default());
        assert!(text.contains("[logging]"));
        assert!(text.contains("directory = logs"));
        assert!(text.contains("file = semantic-logger.log"));
        assert!(text.contains("level = info"));
        assert!(text.contains("stdout = true"));
        assert!(text.contains("clear_on_start = true"));
    }
}
