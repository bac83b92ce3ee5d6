//! Orchestration for `oldest check`: judge every case in a case file.
//!
//! Each case is run through the finder and compared with its expected output
//! using a lenient diff. Subtasks are scored with the min-data reducer.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::lenient::lenient_eq;
use crate::core::reducer::min_data;
use crate::find::find_in_text;
use crate::io::cases::{Case, CaseFile, Subtask, load_case_file};

/// Result of judging a single case.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum CaseVerdict {
    Accepted,
    WrongAnswer { got: String },
    InvalidInput { message: String },
}

impl CaseVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CaseVerdict::Accepted)
    }
}

impl fmt::Display for CaseVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseVerdict::Accepted => write!(f, "accepted"),
            CaseVerdict::WrongAnswer { got } => write!(f, "wrong answer (got {got:?})"),
            CaseVerdict::InvalidInput { message } => write!(f, "invalid input ({message})"),
        }
    }
}

/// Verdict for one case, keyed by its name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub is_sample: bool,
    #[serde(flatten)]
    pub verdict: CaseVerdict,
}

/// Case verdicts of one subtask and its min-data score.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubtaskReport {
    pub name: String,
    pub score: u32,
    pub score_max: u32,
    pub cases: Vec<CaseReport>,
}

/// Outcome of `oldest check` for a whole case file.
///
/// Totals are `u64` sums of the per-subtask `u32` scores.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub slug: String,
    pub title: String,
    pub score: u64,
    pub score_max: u64,
    pub subtasks: Vec<SubtaskReport>,
}

impl CheckReport {
    /// True when every case in every subtask was accepted.
    pub fn all_accepted(&self) -> bool {
        self.subtasks
            .iter()
            .flat_map(|subtask| &subtask.cases)
            .all(|case| case.verdict.is_accepted())
    }
}

/// Run the finder on one case and compare against its expected output.
pub fn judge_case(case: &Case) -> CaseVerdict {
    match find_in_text(&case.input) {
        Ok(person) if lenient_eq(&case.expected, person.name) => CaseVerdict::Accepted,
        Ok(person) => CaseVerdict::WrongAnswer {
            got: person.name.to_string(),
        },
        Err(err) => CaseVerdict::InvalidInput {
            message: err.to_string(),
        },
    }
}

fn judge_subtask(subtask: &Subtask) -> SubtaskReport {
    let cases: Vec<CaseReport> = subtask
        .cases
        .iter()
        .map(|case| {
            let verdict = judge_case(case);
            debug!(subtask = %subtask.name, case = %case.name, %verdict, "judged case");
            CaseReport {
                name: case.name.clone(),
                is_sample: case.is_sample,
                verdict,
            }
        })
        .collect();
    let score = min_data(
        subtask.score_max,
        cases.iter().map(|case| case.verdict.is_accepted()),
    );
    info!(subtask = %subtask.name, score, score_max = subtask.score_max, "scored subtask");
    SubtaskReport {
        name: subtask.name.clone(),
        score,
        score_max: subtask.score_max,
        cases,
    }
}

/// Judge every subtask of an in-memory case file.
pub fn check_cases(file: &CaseFile) -> CheckReport {
    let subtasks: Vec<SubtaskReport> = file.subtasks.iter().map(judge_subtask).collect();
    CheckReport {
        slug: file.task.slug.clone(),
        title: file.task.title.clone(),
        score: subtasks.iter().map(|subtask| u64::from(subtask.score)).sum(),
        score_max: subtasks
            .iter()
            .map(|subtask| u64::from(subtask.score_max))
            .sum(),
        subtasks,
    }
}

/// Load a case file from disk and judge it.
pub fn check_from_path(path: &Path) -> Result<CheckReport> {
    let file = load_case_file(path).context("load cases for check")?;
    Ok(check_cases(&file))
}

/// Render the report as printed on stdout.
pub fn render_report(report: &CheckReport, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(report).context("serialize report");
    }
    let mut lines = Vec::new();
    if !report.title.is_empty() {
        lines.push(report.title.clone());
    }
    for subtask in &report.subtasks {
        for case in &subtask.cases {
            let sample = if case.is_sample { " (sample)" } else { "" };
            lines.push(format!(
                "{} / {}{}: {}",
                subtask.name, case.name, sample, case.verdict
            ));
        }
    }
    lines.push(format!("score {}/{}", report.score, report.score_max));
    Ok(lines.join("\n"))
}
