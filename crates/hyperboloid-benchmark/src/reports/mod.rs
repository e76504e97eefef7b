//! Report generation for evaluation runs.
//!
//! TSV (`identifier<TAB>score`) for the summary table, JSON for the full
//! per-dataset and per-section detail.

pub mod json;
pub mod tsv;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use tracing::info;

use crate::error::{BenchError, BenchResult};
use crate::metrics::SummaryScore;
use crate::runners::EvaluationRun;

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `results_<task>.txt`
    Tsv,
    /// `results_<task>.json`
    Json,
    /// Both files.
    Both,
}

impl ReportFormat {
    fn includes_tsv(self) -> bool {
        matches!(self, ReportFormat::Tsv | ReportFormat::Both)
    }

    fn includes_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" | "txt" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            "both" => Ok(ReportFormat::Both),
            other => Err(format!(
                "unknown report format '{}', expected tsv, json or both",
                other
            )),
        }
    }
}

/// Write the report files of `run` into `dir` and return their paths.
pub fn write_report<T>(
    run: &EvaluationRun<T>,
    format: ReportFormat,
    dir: &Path,
) -> BenchResult<Vec<PathBuf>>
where
    T: Serialize + SummaryScore,
{
    std::fs::create_dir_all(dir).map_err(|e| BenchError::io(dir, e))?;
    let base = dir.join(run.task.file_stem());
    let mut written = Vec::new();

    if format.includes_tsv() {
        let path = base.with_extension("txt");
        std::fs::write(&path, tsv::generate_tsv(run)).map_err(|e| BenchError::io(&path, e))?;
        written.push(path);
    }

    if format.includes_json() {
        let path = base.with_extension("json");
        let content = json::generate_json(run)?;
        std::fs::write(&path, content).map_err(|e| BenchError::io(&path, e))?;
        written.push(path);
    }

    for path in &written {
        info!(path = %path.display(), "Wrote report");
    }
    Ok(written)
}
