//! CLI tests for `oldest check`.
//!
//! Runs the binary against case files and verifies the score line and exit
//! codes for accepted, mismatched and unreadable case files.

use std::process::Command;

use oldest::exit_codes;
use oldest::test_support::write_case_file;

const BUNDLED_CASES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/cases/who-is-the-oldest.toml");

#[test]
fn bundled_cases_are_all_accepted() {
    let output = Command::new(env!("CARGO_BIN_EXE_oldest"))
        .args(["check", BUNDLED_CASES])
        .output()
        .expect("oldest check");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Who is the oldest?\n"), "stdout: {stdout}");
    assert!(
        stdout.contains("Subtask #1 / Test Case #1 (sample): accepted"),
        "stdout: {stdout}"
    );
    assert!(stdout.ends_with("score 100/100\n"), "stdout: {stdout}");
}

#[test]
fn wrong_expectation_exits_with_mismatch_code() {
    let (_temp, path) = write_case_file(
        r#"
[[subtask]]
name = "Subtask #1"
score_max = 30

[[subtask.case]]
name = "Test Case #1"
input = "10 25 7"
expected = "Alvin"
"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_oldest"))
        .arg("check")
        .arg(&path)
        .output()
        .expect("oldest check");

    assert_eq!(output.status.code(), Some(exit_codes::MISMATCH));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Subtask #1 / Test Case #1: wrong answer (got \"Berto\")"),
        "stdout: {stdout}"
    );
    assert!(stdout.ends_with("score 0/30\n"), "stdout: {stdout}");
}

#[test]
fn json_report_lists_scores() {
    let output = Command::new(env!("CARGO_BIN_EXE_oldest"))
        .args(["check", BUNDLED_CASES, "--json"])
        .output()
        .expect("oldest check");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["slug"], "who-is-the-oldest");
    assert_eq!(report["score"], 100);
    assert_eq!(report["subtasks"][1]["score_max"], 70);
}

#[test]
fn missing_case_file_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_oldest"))
        .arg("check")
        .arg(temp.path().join("missing.toml"))
        .output()
        .expect("oldest check");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}
