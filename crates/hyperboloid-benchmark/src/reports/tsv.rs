//! Tab-separated result files: one `identifier<TAB>score` line per file.

use crate::metrics::SummaryScore;
use crate::runners::EvaluationRun;

/// Render the TSV lines of a run. Failed files are left out.
pub fn generate_tsv<T: SummaryScore>(run: &EvaluationRun<T>) -> String {
    let mut out = String::new();
    for (identifier, score) in run.scores() {
        out.push_str(&identifier);
        out.push('\t');
        out.push_str(&format_score(score));
        out.push('\n');
    }
    out
}

/// `0.5`, `1.0`, `nan`: always a decimal point or exponent, lowercase NaN.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        "nan".to_string()
    } else if score == f64::INFINITY {
        "inf".to_string()
    } else if score == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:?}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::{FileEvaluation, FileStatus, Task};
    use chrono::Utc;
    use hyperboloid_geometry::Geometry;

    struct Score(f64);

    impl SummaryScore for Score {
        fn summary_score(&self) -> f64 {
            self.0
        }
    }

    fn file(identifier: &str, geometry: Geometry, status: FileStatus<Score>) -> FileEvaluation<Score> {
        FileEvaluation {
            identifier: identifier.to_string(),
            geometry,
            status,
        }
    }

    #[test]
    fn test_lines_in_order_without_failures() {
        let run = EvaluationRun {
            task: Task::Similarity,
            started_at: Utc::now(),
            files: vec![
                file("h.csv", Geometry::Hyperbolic, FileStatus::Completed(Score(0.25))),
                file(
                    "broken.csv",
                    Geometry::Hyperbolic,
                    FileStatus::Failed {
                        error: "I/O error".to_string(),
                    },
                ),
                file("e.vec", Geometry::Euclidean, FileStatus::Completed(Score(f64::NAN))),
            ],
        };
        assert_eq!(generate_tsv(&run), "h.csv\t0.25\ne.vec\tnan\n");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(0.725), "0.725");
        assert_eq!(format_score(-0.5), "-0.5");
        assert_eq!(format_score(f64::NEG_INFINITY), "-inf");
    }
}
