//! word2vec-format analogy questions.
//!
//! ```text
//! : capital-common-countries
//! Athens Greece Baghdad Iraq
//! Athens Greece Bangkok Thailand
//! ```
//!
//! Lines starting with `:` open a new section; every other non-blank line is
//! one question `a b c d` meaning "a is to b as c is to d".

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BenchError, BenchResult};

/// One analogy question, lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalogyQuestion {
    pub a: String,
    pub b: String,
    pub c: String,
    /// Expected answer.
    pub d: String,
    /// Index into [`QuestionSet::sections`], if the question follows a header.
    pub section: Option<usize>,
}

impl AnalogyQuestion {
    pub fn new(a: &str, b: &str, c: &str, d: &str) -> Self {
        Self {
            a: a.to_lowercase(),
            b: b.to_lowercase(),
            c: c.to_lowercase(),
            d: d.to_lowercase(),
            section: None,
        }
    }

    /// The four words in order.
    pub fn words(&self) -> [&str; 4] {
        [&self.a, &self.b, &self.c, &self.d]
    }
}

/// Questions in file order, plus the section names they were read under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<AnalogyQuestion>,
    pub sections: Vec<String>,
}

impl QuestionSet {
    pub fn new(questions: Vec<AnalogyQuestion>) -> Self {
        Self {
            questions,
            sections: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnalogyQuestion> {
        self.questions.iter()
    }

    /// Name of the section `question` belongs to.
    pub fn section_name(&self, question: &AnalogyQuestion) -> Option<&str> {
        question
            .section
            .and_then(|i| self.sections.get(i))
            .map(String::as_str)
    }

    /// A seeded random subset of at most `n` questions, kept in file order.
    pub fn sample(&self, n: usize, seed: u64) -> QuestionSet {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut indices: Vec<usize> = (0..self.questions.len()).collect();
        indices.shuffle(&mut rng);
        indices.truncate(n);
        indices.sort_unstable();

        QuestionSet {
            questions: indices
                .into_iter()
                .map(|i| self.questions[i].clone())
                .collect(),
            sections: self.sections.clone(),
        }
    }
}

/// Read a questions file from disk.
pub fn read_questions(path: &Path) -> BenchResult<QuestionSet> {
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    let set = parse_questions(BufReader::new(file), path)?;
    info!(
        path = %path.display(),
        questions = set.len(),
        sections = set.sections.len(),
        "Loaded analogy questions"
    );
    Ok(set)
}

/// Parse questions from any buffered reader. `path` is used in errors only.
pub fn parse_questions<R: BufRead>(reader: R, path: &Path) -> BenchResult<QuestionSet> {
    let mut set = QuestionSet::default();
    let mut current_section: Option<usize> = None;

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| BenchError::io(path, e))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if let Some(name) = trimmed.strip_prefix(':') {
            set.sections.push(name.trim().to_string());
            current_section = Some(set.sections.len() - 1);
            continue;
        }

        let words: Vec<&str> = trimmed.split_whitespace().collect();
        match words.as_slice() {
            [a, b, c, d] => {
                let mut question = AnalogyQuestion::new(a, b, c, d);
                question.section = current_section;
                set.questions.push(question);
            }
            _ => {
                return Err(BenchError::parse(
                    path,
                    line_idx + 1,
                    format!("expected 4 words, found {}", words.len()),
                ))
            }
        }
    }

    Ok(set)
}
