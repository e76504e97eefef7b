//! JSON detail report.
//!
//! Carries everything the TSV file drops: per-dataset correlations,
//! per-section accuracy, skip counts and the error of every failed file.
//! Undefined scores (NaN) serialize as `null`.

use serde::Serialize;

use crate::error::BenchResult;
use crate::runners::{EvaluationRun, Task};

/// Schema version of [`JsonReport`].
pub const REPORT_VERSION: &str = "1.0.0";

/// Complete JSON report structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a, T> {
    pub metadata: ReportMetadata,
    pub run: &'a EvaluationRun<T>,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Report version for schema compatibility.
    pub version: String,
    /// Timestamp of generation.
    pub generated_at: String,
    pub task: Task,
    pub files_evaluated: usize,
    pub files_failed: usize,
}

/// Generate the pretty-printed JSON report of a run.
pub fn generate_json<T: Serialize>(run: &EvaluationRun<T>) -> BenchResult<String> {
    let report = JsonReport {
        metadata: ReportMetadata {
            version: REPORT_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            task: run.task,
            files_evaluated: run.files.len(),
            files_failed: run.failures().count(),
        },
        run,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
