//! Integration tests for the linebench CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SUMMARY_PATTERN: &str = r"(?m)^Async: \d+\.\d{4}s \| Sync: \d+\.\d{4}s \| Speedup: \d+\.\d{2}x$";

/// Command rooted in `dir` with no user config and cheap workload defaults
fn linebench(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linebench").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("LINEBENCH_WORKLOAD__HASH_ROUNDS", "5")
        .env("LINEBENCH_WORKLOAD__FLOAT_ITERATIONS", "1000")
        .env_remove("RUST_LOG");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("linebench").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("generate"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("linebench").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("linebench"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("linebench").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_generate_writes_fixture() {
    let temp_dir = TempDir::new().unwrap();

    linebench(&temp_dir)
        .args(["generate", "--file", "input.txt", "--lines", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 12 lines"));

    let content = fs::read_to_string(temp_dir.path().join("input.txt")).unwrap();
    assert_eq!(content.lines().count(), 12);
    assert!(content.starts_with("Line 1 of the test file"));
}

#[test]
fn test_compare_thousand_lines_four_workers() {
    let temp_dir = TempDir::new().unwrap();

    linebench(&temp_dir)
        .args(["generate", "--lines", "1000"])
        .assert()
        .success();

    linebench(&temp_dir)
        .args(["compare", "--workers", "4"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY_PATTERN).unwrap());
}

#[test]
fn test_compare_with_generate_flag() {
    let temp_dir = TempDir::new().unwrap();

    linebench(&temp_dir)
        .args(["compare", "--workers", "2", "--generate", "--lines", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 50 lines"))
        .stdout(predicate::str::is_match(SUMMARY_PATTERN).unwrap());

    assert!(temp_dir.path().join("test.txt").exists());
}

#[test]
fn test_compare_quiet_prints_only_summary() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("test.txt"), "a\nb\nc\n").unwrap();

    let assert = linebench(&temp_dir)
        .args(["--quiet", "compare", "--workers", "3"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Async: "));
}

#[test]
fn test_compare_verbose_shows_breakdown() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("test.txt"), "a\nb\nc\n").unwrap();

    linebench(&temp_dir)
        .args(["-v", "compare", "--workers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines"))
        .stdout(predicate::str::contains("Workers"))
        .stdout(predicate::str::is_match(SUMMARY_PATTERN).unwrap());
}

#[test]
fn test_compare_non_numeric_workers_fails_before_io() {
    let temp_dir = TempDir::new().unwrap();

    // --generate would create the file if the worker count were accepted
    linebench(&temp_dir)
        .args(["compare", "--workers", "abc", "--generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid worker count"));

    assert!(!temp_dir.path().join("test.txt").exists());
}

#[test]
fn test_compare_invalid_workers_reported_before_config_load() {
    let temp_dir = TempDir::new().unwrap();
    // A broken repo config would fail the run if it were read first
    fs::write(temp_dir.path().join("linebench.toml"), "[bench\nbroken").unwrap();

    linebench(&temp_dir)
        .args(["compare", "--workers", "abc", "--generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid worker count"))
        .stderr(predicate::str::contains("Failed to load configuration").not());

    assert!(!temp_dir.path().join("test.txt").exists());
}

#[test]
fn test_compare_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    linebench(&temp_dir)
        .args(["compare", "--workers", "4", "--file", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"))
        .stdout(predicate::str::contains("Async:").not());
}

#[test]
fn test_compare_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("test.txt"), "").unwrap();

    linebench(&temp_dir)
        .args(["compare", "--workers", "4"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY_PATTERN).unwrap());
}

#[test]
fn test_compare_zero_workers() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("test.txt"), "x\ny\n").unwrap();

    linebench(&temp_dir)
        .args(["compare", "--workers", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY_PATTERN).unwrap());
}

#[test]
fn test_repo_config_is_used() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("linebench.toml"),
        "[bench]\nfile = \"data.txt\"\nworkers = 2\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("data.txt"), "one\ntwo\n").unwrap();

    linebench(&temp_dir)
        .arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::is_match(SUMMARY_PATTERN).unwrap());
}

#[test]
fn test_config_show_and_validate() {
    let temp_dir = TempDir::new().unwrap();

    linebench(&temp_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[workload]"))
        .stdout(predicate::str::contains("hash_rounds = 5"));

    linebench(&temp_dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_missing_custom_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    linebench(&temp_dir)
        .args(["--config", "nope.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
