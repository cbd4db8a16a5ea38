//! CLI smoke tests for tasklist
//!
//! The UI itself needs a real terminal; these cover argument handling and the
//! non-interactive subcommands.

use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command instance for the tasklist binary
fn tasklist() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tasklist"))
}

#[test]
fn help_lists_subcommands() {
    tasklist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ui"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn version_flag() {
    tasklist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tasklist"));
}

#[test]
fn bash_completions_mention_binary() {
    tasklist()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tasklist"));
}

#[test]
fn bad_log_filter_fails_before_touching_terminal() {
    let dir = TempDir::new().unwrap();
    tasklist()
        .args(["--log-level", "tasklist=notalevel", "--log-file"])
        .arg(dir.path().join("t.log"))
        .args(["completions", "bash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid log filter"));
}

#[test]
fn zero_tick_is_rejected() {
    tasklist()
        .args(["ui", "--tick-ms", "0"])
        .assert()
        .failure();
}

#[test]
fn log_file_is_created_for_completions() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("nested").join("tasklist.log");
    tasklist()
        .arg("--log-file")
        .arg(&log)
        .args(["completions", "zsh"])
        .assert()
        .success();
    assert!(log.is_file());
}
