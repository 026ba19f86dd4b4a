//! Integration tests for the `semlog` binary.
//!
//! Each test writes its own config file into a temporary directory so the
//! log file ends up there instead of in the working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Temporary config pointing the log file into the test directory.
struct TestEnv {
    _temp: TempDir,
    config: PathBuf,
    log_file: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let log_dir = temp.path().join("logs");
        let config = temp.path().join("config.ini");

        fs::write(
            &config,
            format!(
                "[logging]\ndirectory = {}\nfile = semlog.log\nlevel = debug\nstdout = false\nclear_on_start = true\n",
                log_dir.display()
            ),
        )
        .expect("Failed to write config");

        Self {
            log_file: log_dir.join("semlog.log"),
            config,
            _temp: temp,
        }
    }

    fn run(&self, args: &[&str]) -> std::process::Output {
        run_cli(&self.config, args)
    }

    fn log_content(&self) -> String {
        fs::read_to_string(&self.log_file).expect("Failed to read log file")
    }
}

fn run_cli(config: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_semlog"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command")
}

/// Assert a command succeeded.
fn assert_success(output: &std::process::Output, context: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context, stdout, stderr
        );
    }
}

// ============================================================================
// Log file across invocations
// ============================================================================

#[test]
fn test_consecutive_runs_append_to_log_file() {
    let env = TestEnv::new();

    let output = env.run(&[
        "emit",
        "wake-me-up-in-the-middle-of-the-night",
        "first outage on {}",
        "db-1",
    ]);
    assert_success(&output, "first emit");

    let output = env.run(&["emit", "as-expected-by-default", "second run"]);
    assert_success(&output, "second emit");

    let content = env.log_content();
    assert!(content.contains("first outage on db-1"), "log: {}", content);
    assert!(content.contains("second run"), "log: {}", content);
    assert!(content.contains("ERROR"));
    assert!(content.contains("INFO"));
}

#[test]
fn test_malformed_deadline_leaves_log_file_intact() {
    let env = TestEnv::new();

    let output = env.run(&["emit", "to-investigate-tomorrow", "disk at {}%", "91"]);
    assert_success(&output, "emit");
    let before = env.log_content();

    let output = env.run(&["remind", "2018-13-45", "Remove legacy importer"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2018-13-45"), "stderr: {}", stderr);

    assert_eq!(env.log_content(), before);
}

// ============================================================================
// Reminders
// ============================================================================

#[test]
fn test_remind_with_fixed_today() {
    let env = TestEnv::new();

    let output = env.run(&[
        "remind",
        "2018-10-23",
        "quiet on the deadline day",
        "--today",
        "2018-10-23",
    ]);
    assert_success(&output, "remind on deadline");

    let output = env.run(&[
        "remind",
        "2018-10-23",
        "Remove legacy importer",
        "--today",
        "2018-10-24",
    ]);
    assert_success(&output, "remind after deadline");

    let content = env.log_content();
    assert!(!content.contains("quiet on the deadline day"));
    assert!(content.contains("Remove legacy importer"));
    assert!(content.contains("ERROR"));
}

#[test]
fn test_invalid_today_is_reported_as_today() {
    let env = TestEnv::new();

    let output = env.run(&["remind", "2018-10-23", "x", "--today", "someday"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid value 'someday' for --today"),
        "stderr: {}",
        stderr
    );
    assert!(!env.log_file.exists());
}
