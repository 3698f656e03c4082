//! Integration tests for tabprint CLI

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::{tempdir, TempDir};

const DATA: &str = r#"{
    "users": [
        {"id": 1, "name": "Steven Seagal", "password": "123456"},
        {"id": 2, "name": "Eva Song", "password": "789456"}
    ],
    "test": [{"id": 1}]
}"#;

const USERS_TABLE: &str = "\
╔════════════════╦════════════════╦════════════════╗
║       id       ║      name      ║    password    ║
╠════════════════╬════════════════╬════════════════╣
║       1        ║ Steven Seagal  ║     123456     ║
╠════════════════╬════════════════╬════════════════╣
║       2        ║    Eva Song    ║     789456     ║
╚════════════════╩════════════════╩════════════════╝
";

fn data_file() -> (TempDir, String) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("db.json");
    fs::write(&path, DATA).expect("Failed to write data file");
    let path = path.to_string_lossy().to_string();
    (dir, path)
}

fn run_tabprint(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_tabprint"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_with_stdin(data: &Path, input: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tabprint"))
        .args(["--data", &data.to_string_lossy()])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait on command");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_tabprint(&["--help"]);

    assert!(success);
    assert!(stdout.contains("tabprint"));
    assert!(stdout.contains("--data"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_tabprint(&["--version"]);

    assert!(success);
    assert!(stdout.contains("tabprint"));
}

#[test]
fn test_print_table() {
    let (_dir, path) = data_file();
    let (stdout, _, success) = run_tabprint(&["--data", &path, "print", "users"]);

    assert!(success);
    assert_eq!(stdout, USERS_TABLE);
}

#[test]
fn test_print_missing_table() {
    let (_dir, path) = data_file();
    let (stdout, _, success) = run_tabprint(&["-d", &path, "print", "testing"]);

    assert!(success);
    assert_eq!(
        stdout,
        "╔════════════════════════════════════════════╗\n\
         ║ Table 'testing' is empty or does not exist ║\n\
         ╚════════════════════════════════════════════╝\n"
    );
}

#[test]
fn test_json_output() {
    let (_dir, path) = data_file();
    let (stdout, _, success) = run_tabprint(&["-d", &path, "-o", "json", "print", "users"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    assert_eq!(parsed[1]["name"], "Eva Song");
}

#[test]
fn test_too_many_arguments() {
    let (_dir, path) = data_file();
    let (stdout, stderr, success) = run_tabprint(&["-d", &path, "print", "users", "extra"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Expected 1, but is 2"));
}

#[test]
fn test_unknown_command() {
    let (_dir, path) = data_file();
    let (_, stderr, success) = run_tabprint(&["-d", &path, "list", "users"]);

    assert!(!success);
    assert!(stderr.contains("unknown command"));
}

#[test]
fn test_missing_data_file() {
    let (_, stderr, success) = run_tabprint(&["-d", "/nonexistent/db.json", "print", "users"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("/nonexistent/db.json"));
}

#[test]
fn test_commands_from_stdin() {
    let (dir, _) = data_file();
    let (stdout, _, success) =
        run_with_stdin(&dir.path().join("db.json"), "print test\n\nprint users\n");

    assert!(success);
    assert_eq!(
        stdout,
        format!("╔════╗\n║ id ║\n╠════╣\n║ 1  ║\n╚════╝\n{}", USERS_TABLE)
    );
}
