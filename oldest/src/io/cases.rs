//! Case file parsing and validation.
//!
//! A case file is TOML describing a task, its subtasks, and the test cases
//! each subtask is scored on:
//!
//! ```toml
//! [task]
//! slug = "who-is-the-oldest"
//! title = "Who is the oldest?"
//!
//! [[subtask]]
//! name = "Subtask #1"
//! score_max = 30
//!
//! [[subtask.case]]
//! name = "Test Case #1"
//! input = "10\n25\n7\n"
//! expected = "Berto\n"
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

/// A parsed case file: task metadata plus its scored subtasks.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseFile {
    #[serde(default)]
    pub task: TaskMeta,
    #[serde(default, rename = "subtask")]
    pub subtasks: Vec<Subtask>,
}

/// Task identification, shown in the report header.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TaskMeta {
    /// Stable identifier (e.g. `who-is-the-oldest`).
    #[serde(default)]
    pub slug: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
}

/// Group of cases scored together with the min-data reducer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    pub name: String,
    /// Points awarded when every case is accepted.
    pub score_max: u32,
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

/// One input with its expected output.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub input: String,
    pub expected: String,
    /// Sample cases are the ones shown alongside the task statement.
    #[serde(default)]
    pub is_sample: bool,
}

/// Load and validate a case file from disk.
pub fn load_case_file(path: &Path) -> Result<CaseFile> {
    debug!(path = %path.display(), "loading case file");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read case file {}", path.display()))?;
    parse_case_file(&contents).with_context(|| format!("parse case file {}", path.display()))
}

/// Parse case file contents and check its structure.
pub fn parse_case_file(contents: &str) -> Result<CaseFile> {
    let file: CaseFile = toml::from_str(contents).context("parse toml")?;
    validate_case_file(&file)?;
    Ok(file)
}

fn validate_case_file(file: &CaseFile) -> Result<()> {
    if file.subtasks.is_empty() {
        bail!("case file has no subtasks");
    }
    let mut seen = BTreeSet::new();
    for subtask in &file.subtasks {
        if subtask.name.trim().is_empty() {
            bail!("subtask name must be non-empty");
        }
        if !seen.insert(subtask.name.as_str()) {
            bail!("duplicate subtask name '{}'", subtask.name);
        }
        if subtask.cases.is_empty() {
            bail!("subtask '{}' has no cases", subtask.name);
        }
    }
    Ok(())
}
