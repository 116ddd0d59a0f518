// tests/cli_map.rs
//! Binary smoke tests: `wingman map` and `wingman prompt` on a temp repo.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn go_repo() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = dir.path();
    fs::write(root.join("go.mod"), "module example.com/demo\n").expect("write go.mod");
    fs::create_dir_all(root.join("util")).expect("mkdir util");
    fs::write(
        root.join("util/util.go"),
        "package util\n\nfunc Clamp(v, lo, hi int) int { return v }\n",
    )
    .expect("write util.go");
    fs::write(
        root.join("main.go"),
        "package main\n\nimport \"example.com/demo/util\"\n\nfunc main() { util.Clamp(1, 0, 2) }\n",
    )
    .expect("write main.go");
    dir
}

fn wingman(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wingman"))
        .args(args)
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute wingman")
}

#[test]
fn test_map_json() {
    let dir = go_repo();
    let output = wingman(&dir, &["map", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    let entries = json["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "main.go");
    assert_eq!(entries[1]["signatures"][0]["name"], "Clamp");
}

#[test]
fn test_map_text_limit() {
    let dir = go_repo();
    let output = wingman(&dir, &["map", "--limit", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. main.go"));
    assert!(!stdout.contains("util/util.go ["));
}

#[test]
fn test_prompt_budget_exit_code() {
    let dir = go_repo();
    let output = wingman(&dir, &["prompt", "--query", "what clamps?", "--budget", "5"]);
    assert_eq!(output.status.code(), Some(3));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("what clamps?"));
}

#[test]
fn test_missing_root_fails() {
    let dir = go_repo();
    let output = wingman(&dir, &["map", "does-not-exist"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}
