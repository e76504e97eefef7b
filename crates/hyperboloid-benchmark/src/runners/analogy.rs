//! Analogy accuracy scoring for both geometries.
//!
//! # Hyperbolic
//!
//! `a : b = c : ?` is answered by parallel transport on the hyperboloid
//! ([`word_analogy`]); the query words are dropped from the ranked
//! candidates and the nearest remaining word is the prediction.
//!
//! # Euclidean
//!
//! 3CosAdd on unit vectors: `argmax_w cos(w, b - a + c)`. The scores of the
//! three query words are set to zero, not removed, so a query word still wins
//! when every other word scores below zero or when the table holds nothing
//! but the query words. Only the hyperbolic path can end in
//! [`SkipReason::NoCandidate`].

use std::borrow::Cow;

use hyperboloid_geometry::{word_analogy, EmbeddingTable, Geometry, GeometryError, GeometryResult};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::datasets::{AnalogyQuestion, QuestionSet};
use crate::metrics::{AnalogyAccuracy, QuestionOutcome, SkipReason};

/// Scores analogy questions against one embedding table.
#[derive(Debug)]
pub struct AnalogyScorer<'a> {
    /// Raw table for hyperbolic scoring, unit-normalized for Euclidean.
    table: Cow<'a, EmbeddingTable>,
    geometry: Geometry,
    candidates: usize,
}

impl<'a> AnalogyScorer<'a> {
    /// Prepare a scorer. Euclidean tables are normalized once here.
    ///
    /// `candidates` is the number of hyperbolic neighbours fetched before the
    /// query words are excluded.
    pub fn new(table: &'a EmbeddingTable, geometry: Geometry, candidates: usize) -> Self {
        let table = match geometry {
            Geometry::Hyperbolic => Cow::Borrowed(table),
            Geometry::Euclidean => Cow::Owned(table.l2_normalized()),
        };
        Self {
            table,
            geometry,
            candidates,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Score a single question.
    ///
    /// # Errors
    ///
    /// Only table/vector shape errors; vocabulary misses become
    /// [`QuestionOutcome::Skipped`].
    pub fn evaluate_question(&self, question: &AnalogyQuestion) -> GeometryResult<QuestionOutcome> {
        if let Some(missing) = question.words().into_iter().find(|w| !self.table.contains(w)) {
            debug!(word = missing, "Skipping question with out-of-vocabulary word");
            return Ok(QuestionOutcome::Skipped(SkipReason::MissingWord(
                missing.to_string(),
            )));
        }

        let prediction = match self.geometry {
            Geometry::Hyperbolic => self.predict_hyperbolic(question),
            Geometry::Euclidean => self.predict_euclidean(question),
        };

        match prediction {
            Ok(Some(predicted)) if predicted.to_lowercase() == question.d => {
                Ok(QuestionOutcome::Correct)
            }
            Ok(Some(predicted)) => Ok(QuestionOutcome::Incorrect { predicted }),
            Ok(None) => Ok(QuestionOutcome::Skipped(SkipReason::NoCandidate)),
            Err(e) if e.is_lookup_miss() => {
                let word = e.missing_word().unwrap_or_default().to_string();
                Ok(QuestionOutcome::Skipped(SkipReason::MissingWord(word)))
            }
            Err(e) => Err(e),
        }
    }

    /// Score every question in parallel and fold the outcomes in question order.
    pub fn evaluate(&self, questions: &QuestionSet) -> GeometryResult<AnalogyAccuracy> {
        let outcomes = questions
            .questions
            .par_iter()
            .map(|q| self.evaluate_question(q))
            .collect::<GeometryResult<Vec<_>>>()?;

        let accuracy = AnalogyAccuracy::from_outcomes(questions, &outcomes);
        info!(
            geometry = %self.geometry,
            processed = accuracy.processed,
            total = accuracy.total,
            accuracy = accuracy.accuracy,
            "Analogy evaluation finished"
        );
        Ok(accuracy)
    }

    fn query_indices(&self, question: &AnalogyQuestion) -> GeometryResult<[usize; 3]> {
        let index = |w: &str| {
            self.table
                .index_of(w)
                .ok_or_else(|| GeometryError::WordNotFound(w.to_string()))
        };
        Ok([index(&question.a)?, index(&question.b)?, index(&question.c)?])
    }

    fn predict_hyperbolic(&self, question: &AnalogyQuestion) -> GeometryResult<Option<String>> {
        let excluded = self.query_indices(question)?;
        let candidates = word_analogy(
            &question.a,
            &question.b,
            &question.c,
            &self.table,
            self.candidates,
        )?;

        Ok(candidates
            .into_iter()
            .find(|n| !excluded.contains(&n.index))
            .map(|n| n.word))
    }

    fn predict_euclidean(&self, question: &AnalogyQuestion) -> GeometryResult<Option<String>> {
        let excluded = self.query_indices(question)?;
        let va = self.table.lookup(&question.a)?;
        let vb = self.table.lookup(&question.b)?;
        let vc = self.table.lookup(&question.c)?;
        let target = &vb - &va + &vc;

        let mut scores = self.table.vectors().dot(&target);
        for i in excluded {
            scores[i] = 0.0;
        }

        // First index wins ties; NaN scores never win.
        let mut best: Option<(usize, f64)> = None;
        for (i, &s) in scores.iter().enumerate() {
            match best {
                Some((_, top)) if !(s > top) => {}
                _ if s.is_nan() => {}
                _ => best = Some((i, s)),
            }
        }

        Ok(best.and_then(|(i, _)| self.table.word(i).map(str::to_string)))
    }
}
