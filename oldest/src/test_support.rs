//! Test-only helpers for building case files.

use std::fs;
use std::path::PathBuf;

use crate::io::cases::{Case, Subtask};

/// Create a case with the given input and expected output.
pub fn case(name: &str, input: &str, expected: &str) -> Case {
    Case {
        name: name.to_string(),
        input: input.to_string(),
        expected: expected.to_string(),
        is_sample: false,
    }
}

/// Create a sample case (one shown with the task statement).
pub fn sample_case(name: &str, input: &str, expected: &str) -> Case {
    Case {
        is_sample: true,
        ..case(name, input, expected)
    }
}

/// Create a subtask holding `cases`.
pub fn subtask(name: &str, score_max: u32, cases: Vec<Case>) -> Subtask {
    Subtask {
        name: name.to_string(),
        score_max,
        cases,
    }
}

/// Write `contents` as `cases.toml` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for as long as the path is used.
pub fn write_case_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("cases.toml");
    fs::write(&path, contents).expect("write case file");
    (temp, path)
}
