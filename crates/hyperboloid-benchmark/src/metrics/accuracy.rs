//! Analogy accuracy bookkeeping.
//!
//! Each question produces a [`QuestionOutcome`]; [`AnalogyAccuracy`] folds
//! them into totals overall and per question-file section. Skipped questions
//! are excluded from the denominator.

use serde::{Deserialize, Serialize};

use crate::datasets::QuestionSet;
use crate::metrics::SummaryScore;

/// Why a question was not scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A question word (answer included) is not in the vocabulary.
    MissingWord(String),
    /// Nothing was left to predict once the query words were excluded.
    NoCandidate,
}

/// Result of scoring a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionOutcome {
    Correct,
    Incorrect { predicted: String },
    Skipped(SkipReason),
}

impl QuestionOutcome {
    pub fn is_processed(&self) -> bool {
        !matches!(self, QuestionOutcome::Skipped(_))
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, QuestionOutcome::Correct)
    }
}

/// Counts for one section of the questions file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionAccuracy {
    pub name: String,
    pub total: usize,
    pub processed: usize,
    pub correct: usize,
    pub accuracy: f64,
}

/// Top-1 analogy accuracy over a question set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogyAccuracy {
    /// Questions in the set.
    pub total: usize,
    /// Questions actually scored.
    pub processed: usize,
    pub correct: usize,
    pub skipped: usize,
    /// Skips caused by out-of-vocabulary words.
    pub missing_word: usize,
    /// Skips caused by an empty candidate list.
    pub no_candidate: usize,
    /// `correct / processed`; NaN when nothing was processed.
    pub accuracy: f64,
    /// Breakdown in section order. Empty if the file had no section headers.
    pub sections: Vec<SectionAccuracy>,
}

impl AnalogyAccuracy {
    /// Fold per-question outcomes, given in the order of `questions`.
    pub fn from_outcomes(questions: &QuestionSet, outcomes: &[QuestionOutcome]) -> Self {
        debug_assert_eq!(questions.len(), outcomes.len());

        let mut sections: Vec<SectionAccuracy> = questions
            .sections
            .iter()
            .map(|name| SectionAccuracy {
                name: name.clone(),
                ..Default::default()
            })
            .collect();

        let mut processed = 0;
        let mut correct = 0;
        let mut missing_word = 0;
        let mut no_candidate = 0;

        for (question, outcome) in questions.iter().zip(outcomes) {
            let section = question.section.and_then(|i| sections.get_mut(i));
            match outcome {
                QuestionOutcome::Skipped(SkipReason::MissingWord(_)) => missing_word += 1,
                QuestionOutcome::Skipped(SkipReason::NoCandidate) => no_candidate += 1,
                _ => {
                    processed += 1;
                    if outcome.is_correct() {
                        correct += 1;
                    }
                }
            }
            if let Some(section) = section {
                section.total += 1;
                if outcome.is_processed() {
                    section.processed += 1;
                }
                if outcome.is_correct() {
                    section.correct += 1;
                }
            }
        }

        for section in &mut sections {
            section.accuracy = ratio(section.correct, section.processed);
        }

        Self {
            total: outcomes.len(),
            processed,
            correct,
            skipped: missing_word + no_candidate,
            missing_word,
            no_candidate,
            accuracy: ratio(correct, processed),
            sections,
        }
    }
}

impl SummaryScore for AnalogyAccuracy {
    fn summary_score(&self) -> f64 {
        self.accuracy
    }
}

fn ratio(correct: usize, processed: usize) -> f64 {
    if processed == 0 {
        f64::NAN
    } else {
        correct as f64 / processed as f64
    }
}
