//! End-to-end check that semantic loggers reach the configured log file.
//!
//! Kept in its own test binary because installing the global subscriber
//! can only happen once per process.

use std::fs;

use semantic_logger::config::LoggingSettings;
use semantic_logger::logging::init_logging;
use semantic_logger::SemanticLoggerFactory;
use tempfile::TempDir;

#[derive(Debug)]
struct Timeout;

impl std::fmt::Display for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("gateway timeout")
    }
}

impl std::error::Error for Timeout {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[test]
fn semantic_messages_are_written_to_the_log_file() {
    std::env::remove_var("RUST_LOG");

    let temp = TempDir::new().unwrap();
    let settings = LoggingSettings {
        directory: temp.path().join("logs"),
        file: "test.log".to_string(),
        level: "debug".to_string(),
        stdout: false,
        clear_on_start: true,
    };
    fs::create_dir_all(&settings.directory).unwrap();
    fs::write(settings.file_path(), "stale content").unwrap();

    let guard = init_logging(&settings).unwrap();

    let logger = SemanticLoggerFactory::get_logger("checkout");
    logger.to_investigate_tomorrow_with_two("Retry {} of {}", 2, 5);
    logger.wake_me_up_in_the_middle_of_the_night_with_error("Payment failed", &Timeout);
    logger.for_test_purpose_with_args("{} {} {}", &[&"a", &"b", &"c"]);
    logger
        .remind_to_remove_unused_implementation_after("2000-01-01", "Drop the legacy endpoint")
        .unwrap();

    drop(guard);

    let contents = fs::read_to_string(settings.file_path()).unwrap();
    assert!(!contents.contains("stale content"));
    assert!(contents.contains("checkout"));
    assert!(contents.contains("Retry 2 of 5"));
    assert!(contents.contains("WARN"));
    assert!(contents.contains("Payment failed"));
    assert!(contents.contains("gateway timeout"));
    assert!(contents.contains("a b c"));
    assert!(contents.contains("Drop the legacy endpoint"));
}
