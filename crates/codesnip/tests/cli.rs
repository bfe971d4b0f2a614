//! CLI integration tests.
//!
//! These invoke the `codesnip` binary and check exit status and output.
//! No font ships with the tests, so rendering is only exercised up to the
//! font-loading failure; `--tokens` covers the rest of the pipeline.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const PROGRAM: &str = "#include <stdio.h>\n\nint main() {\n\treturn 0; // done\n}\n";

fn create_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write test source");
    path
}

fn codesnip(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_codesnip"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CODESNIP_FONT")
        .output()
        .expect("failed to execute codesnip")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let result = codesnip(temp_dir.path(), &[]);

    assert_eq!(result.status.code(), Some(1));
    let err = stderr(&result);
    assert!(err.starts_with("error: missing file path"), "stderr: {err}");
    assert!(err.contains("Usage: codesnip <file> [N-M]"), "stderr: {err}");
}

#[test]
fn test_help_succeeds() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let result = codesnip(temp_dir.path(), &["--help"]);

    assert!(result.status.success());
    assert!(stdout(&result).contains("--tab-width <n>"));
}

#[test]
fn test_tokens_lists_selected_range() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    create_source(&temp_dir, "main.c", PROGRAM);
    let result = codesnip(temp_dir.path(), &["main.c", "4-4", "--tokens"]);

    assert!(result.status.success(), "stderr: {}", stderr(&result));
    let listing = stdout(&result);
    let kinds: Vec<&str> = listing
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|kind| *kind != "space")
        .collect();
    assert_eq!(
        kinds,
        ["keyword", "number", "`;`", "comment", "comment", "newline"]
    );
    assert!(!temp_dir.path().join("code.png").exists());
}

#[test]
fn test_out_of_range_fails() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    create_source(&temp_dir, "main.c", PROGRAM);
    let result = codesnip(temp_dir.path(), &["main.c", "2-9"]);

    assert_eq!(result.status.code(), Some(1));
    assert_eq!(stderr(&result).trim(), "error: range must be between 1 and 5");
}

#[test]
fn test_malformed_range_fails() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    create_source(&temp_dir, "main.c", PROGRAM);
    let result = codesnip(temp_dir.path(), &["main.c", "two-three"]);

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("invalid range 'two-three'"));
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let result = codesnip(temp_dir.path(), &["absent.c"]);

    assert_eq!(result.status.code(), Some(1));
    assert_eq!(stderr(&result).trim(), "error: cannot find file 'absent.c'");
}

#[test]
fn test_missing_font_fails_without_output() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    create_source(&temp_dir, "main.c", PROGRAM);
    let result = codesnip(temp_dir.path(), &["main.c", "--font", "nope.ttf"]);

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).starts_with("error: cannot read font 'nope.ttf'"));
    assert!(!temp_dir.path().join("code.png").exists());
}
