//! Integration tests for metricsdoc CLI

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn run_metricsdoc(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_metricsdoc"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_metricsdoc(&["--help"]);

    assert!(success);
    assert!(stdout.contains("Prints a list of all runtime metrics"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--descriptors"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_metricsdoc(&["--version"]);

    assert!(success);
    assert!(stdout.contains("metricsdoc"));
}

#[test]
fn test_default_is_markdown() {
    let (stdout, stderr, success) = run_metricsdoc(&[]);

    assert!(success);
    assert!(stderr.is_empty());
    let mut lines = stdout.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("| Name"));
    assert!(header.contains("| Kind"));
    assert!(header.contains("| Cumulative"));
    assert!(header.contains("| Description"));
    assert!(lines.next().unwrap().starts_with("|---"));
    assert!(stdout.contains("/gc/heap/allocs:bytes"));
}

#[test]
fn test_markdown_format_flag() {
    let (explicit, _, success) = run_metricsdoc(&["--format", "markdown"]);
    let (default, _, _) = run_metricsdoc(&[]);

    assert!(success);
    assert_eq!(explicit, default);
}

#[test]
fn test_csv_output() {
    let (stdout, _, success) = run_metricsdoc(&["--format", "csv"]);

    assert!(success);
    assert_eq!(stdout.lines().next(), Some("Name,Kind,Cumulative,Description"));
    assert!(stdout
        .lines()
        .any(|l| l.starts_with("/gc/heap/allocs:bytes,KindUint64,true,")));
    assert!(stdout.contains("KindFloat64Histogram"));
}

#[test]
fn test_unknown_format_fails_without_output() {
    let (stdout, stderr, success) = run_metricsdoc(&["--format", "json"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("unknown format \"json\""));
}

#[test]
fn test_descriptors_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metrics.json");
    fs::write(
        &path,
        r#"[
            {"name": "/custom/a:bytes", "kind": 1, "cumulative": true, "description": "x,y"},
            {"name": "/custom/b:things", "kind": 77, "cumulative": false, "description": "a|b"}
        ]"#,
    )
    .unwrap();
    let path = path.to_str().unwrap();

    let (stdout, _, success) = run_metricsdoc(&["--format", "csv", "--descriptors", path]);
    assert!(success);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Name,Kind,Cumulative,Description",
            "/custom/a:bytes,KindUint64,true,\"x,y\"",
            "/custom/b:things,Unknown,false,a|b",
        ]
    );

    let (stdout, _, success) = run_metricsdoc(&["--descriptors", path]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("a\\|b"));
}

#[test]
fn test_missing_descriptors_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let (stdout, stderr, success) =
        run_metricsdoc(&["--descriptors", path.to_str().unwrap()]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("nope.json"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let (stdout, stderr, success) = run_metricsdoc(&["-vv", "--format", "csv"]);

    assert!(success);
    assert!(stderr.contains("flushing table"));
    assert!(!stdout.contains("flushing table"));
    assert_eq!(stdout.lines().next(), Some("Name,Kind,Cumulative,Description"));
}
