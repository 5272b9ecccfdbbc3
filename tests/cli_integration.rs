//! Integration tests for the `todo` binary's startup surface.
//!
//! Each test runs `todo` as a subprocess with arguments that make it exit
//! before the window opens, so no terminal is needed.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `todo` binary.
fn todo_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_todo"))
}

fn run_todo(args: &[&str]) -> Output {
    Command::new(todo_bin())
        .args(args)
        .output()
        .expect("failed to run todo")
}

#[test]
fn version_flag() {
    let out = run_todo(&["--version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("todo "), "stdout: {stdout}");
}

#[test]
fn help_lists_flags() {
    let out = run_todo(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for flag in ["--config", "--log-file", "--log-level", "--empty"] {
        assert!(stdout.contains(flag), "missing {flag} in: {stdout}");
    }
}

#[test]
fn missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.toml");
    let out = run_todo(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: could not read"), "stderr: {stderr}");
    assert!(stderr.contains("absent.toml"));
}

#[test]
fn malformed_config_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[window]\nwidth = \"wide\"\n").unwrap();
    let out = run_todo(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: could not parse"), "stderr: {stderr}");
}

#[test]
fn invalid_log_level_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "").unwrap();
    let log = tmp.path().join("todo.log");
    let out = run_todo(&[
        "--config",
        config.to_str().unwrap(),
        "--log-file",
        log.to_str().unwrap(),
        "--log-level",
        "todo=loud",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid log level"), "stderr: {stderr}");
}

#[test]
fn invalid_log_level_fails_without_log_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.toml");
    fs::write(&config, "").unwrap();
    let out = run_todo(&["--config", config.to_str().unwrap(), "--log-level", "todo=loud"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid log level"), "stderr: {stderr}");
}

#[test]
fn unknown_argument_is_rejected() {
    let out = run_todo(&["add", "Buy milk"]);
    assert!(!out.status.success());
}
