//! End-to-end tests for the daylog binary.
//!
//! Drives the full flow against a temp snapshot: add → show → report →
//! import → clear, with the snapshot path injected via `DAYLOG_LOG_PATH`.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn daylog_binary() -> String {
    env!("CARGO_BIN_EXE_daylog").to_string()
}

fn daylog(log_path: &Path, args: &[&str]) -> Output {
    Command::new(daylog_binary())
        .env("DAYLOG_LOG_PATH", log_path)
        .args(args)
        .output()
        .expect("failed to run daylog")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "daylog failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_add_show_report_flow() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log.json");

    stdout(&daylog(&log_path, &["add", "0800", "sleep"]));
    stdout(&daylog(&log_path, &["add", "0900", "email"]));
    let added = stdout(&daylog(&log_path, &["add", "1200", "work"]));
    assert!(added.contains("Logged work from 900 to 1200 (3:00)"));

    let shown = stdout(&daylog(&log_path, &["show"]));
    assert!(shown.contains("sleep"));
    assert!(shown.contains("8:00"));

    let report = stdout(&daylog(&log_path, &["report"]));
    let lines: Vec<&str> = report.lines().collect();
    // Sorted by label, with the grand total last.
    assert!(lines[0].starts_with("email"));
    assert!(lines[1].starts_with("sleep"));
    assert!(lines[2].starts_with("work"));
    assert!(lines[3].starts_with("TOTAL"));
    assert!(lines[3].ends_with("12:00"));
}

#[test]
fn test_add_rejects_invalid_time() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log.json");

    let output = daylog(&log_path, &["add", "0960", "email"]);
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("invalid minutes"),
        "stderr should name the bad field"
    );

    // Nothing was persisted.
    assert!(!log_path.exists());
}

#[test]
fn test_import_from_stdin() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log.json");

    let mut child = Command::new(daylog_binary())
        .env("DAYLOG_LOG_PATH", &log_path)
        .arg("import")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"0930 email inbox pass\n1200 work\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(stdout(&output).contains("Imported 2 entries"));

    let report = stdout(&daylog(&log_path, &["report", "--json"]));
    let summary: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(summary["totalMinutes"], 720);
}

#[test]
fn test_clear_resets_log() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log.json");

    stdout(&daylog(&log_path, &["add", "0930", "email"]));
    let cleared = stdout(&daylog(&log_path, &["clear"]));
    assert!(cleared.contains("Cleared 1 entries"));

    let shown = stdout(&daylog(&log_path, &["show"]));
    assert!(shown.contains("No entries logged."));
}

#[test]
fn test_snapshot_roundtrips_field_names() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log.json");

    stdout(&daylog(
        &log_path,
        &[
            "add",
            "0930",
            "email",
            "--comment",
            "inbox",
            "--date",
            "2025-03-14",
        ],
    ));

    let blob = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(
        blob,
        r#"[{"endTime":"0930","activityLabel":"email","comment":"inbox","date":"2025-03-14"}]"#
    );
}

#[test]
fn test_status_reports_snapshot() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log.json");

    stdout(&daylog(&log_path, &["add", "2400", "sleep"]));
    let status = stdout(&daylog(&log_path, &["status"]));
    assert!(status.contains("Entries:  1"));
    assert!(status.contains("Last:     sleep (2400)"));
}
