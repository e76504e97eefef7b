//! End-to-end tests: files on disk → harness → report files.

mod common;

use std::path::Path;

use hyperboloid_benchmark::{
    load_embeddings, read_similarity_dataset, write_report, EvaluationConfig, EvaluationHarness,
    FileStatus, ReportFormat, SimilarityScorer, SummaryScore, Task,
};
use hyperboloid_geometry::Geometry;
use tempfile::TempDir;

use crate::common::fixtures::{
    line_csv, line_questions, royal_questions, royal_vec, toy_hyperbolic_csv, write_file,
};

fn base_config(dir: &Path) -> EvaluationConfig {
    EvaluationConfig {
        output_dir: dir.join("out"),
        ..Default::default()
    }
}

// ========== SIMILARITY ==========

#[test]
fn test_toy_table_single_pair() {
    let dir = TempDir::new().unwrap();
    let vectors = write_file(dir.path(), "toy.csv", &toy_hyperbolic_csv());
    let gold = write_file(dir.path(), "pair.txt", "Cat\ttiger\t8.5\n");

    let table = load_embeddings(&vectors, Geometry::Hyperbolic).unwrap();
    assert_eq!(table.len(), 5);
    let dataset = read_similarity_dataset(&gold).unwrap();

    let result = SimilarityScorer::new(&table, Geometry::Hyperbolic).correlate(&dataset);
    assert_eq!(result.not_found, 0);
    assert_eq!(result.total_size, 1);
    assert_eq!(result.found, 1);
    // A single pair has no rank correlation.
    assert!(result.rho.is_nan());
}

#[test]
fn test_similarity_harness_both_geometries() {
    let dir = TempDir::new().unwrap();
    let toy = write_file(dir.path(), "toy.csv", &toy_hyperbolic_csv());
    let royal = write_file(dir.path(), "royal.vec", &royal_vec());
    write_file(
        dir.path(),
        "animals.txt",
        "cat tiger 9.0\ncat dog 6.0\ncat truck 1.0\nking queen 8.0\n",
    );

    let mut config = base_config(dir.path());
    config.hyperbolic_files = vec![toy.clone()];
    config.euclidean_files = vec![royal.clone()];
    config.similarity.data_dir = dir.path().to_path_buf();
    config.similarity.datasets = vec!["animals.txt".to_string()];

    let harness = EvaluationHarness::new(config).unwrap();
    let run = harness.run_similarity().unwrap();
    assert_eq!(run.task, Task::Similarity);
    assert_eq!(run.files.len(), 2);

    let hyperbolic = run.files[0].result().unwrap();
    assert_eq!(run.files[0].geometry, Geometry::Hyperbolic);
    assert_eq!(hyperbolic.datasets[0].total_size, 4);
    assert_eq!(hyperbolic.datasets[0].not_found, 1);
    assert!((hyperbolic.summary_score() - 1.0).abs() < 1e-12);

    // Only king/queen is in the Euclidean vocabulary.
    let euclidean = run.files[1].result().unwrap();
    assert_eq!(euclidean.datasets[0].found, 1);
    assert!(euclidean.weighted_rho.is_nan());

    let written = write_report(&run, ReportFormat::Tsv, &harness.config().output_dir).unwrap();
    let tsv = std::fs::read_to_string(&written[0]).unwrap();
    assert!(written[0].ends_with("results_similarity.txt"));
    assert_eq!(
        tsv,
        format!("{}\t1.0\n{}\tnan\n", toy.display(), royal.display())
    );
}

// ========== ANALOGY ==========

#[test]
fn test_analogy_answer_on_geodesic_is_found() {
    let dir = TempDir::new().unwrap();
    let vectors = write_file(dir.path(), "line.csv", &line_csv(6));
    let questions = write_file(dir.path(), "questions.txt", line_questions());

    let mut config = base_config(dir.path());
    config.hyperbolic_files = vec![vectors];
    config.analogy.questions_file = questions;

    let run = EvaluationHarness::new(config).unwrap().run_analogy().unwrap();
    let accuracy = run.files[0].result().unwrap();

    assert_eq!(accuracy.total, 4);
    assert_eq!(accuracy.processed, 3);
    assert_eq!(accuracy.missing_word, 1);
    assert!((accuracy.accuracy - 1.0).abs() < 1e-12);
    assert_eq!(accuracy.sections[0].name, "line");
    assert!(accuracy.sections[1].accuracy.is_nan());
}

#[test]
fn test_euclidean_analogy_from_vec_file() {
    let dir = TempDir::new().unwrap();
    let vectors = write_file(dir.path(), "royal.vec", &royal_vec());
    let questions = write_file(dir.path(), "questions.txt", royal_questions());

    let mut config = base_config(dir.path());
    config.euclidean_files = vec![vectors];
    config.analogy.questions_file = questions;

    let run = EvaluationHarness::new(config).unwrap().run_analogy().unwrap();
    let accuracy = run.files[0].result().unwrap();
    assert_eq!(accuracy.processed, 1);
    assert!((accuracy.summary_score() - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_processed_questions_is_nan() {
    let dir = TempDir::new().unwrap();
    let vectors = write_file(dir.path(), "line.csv", &line_csv(4));
    let questions = write_file(dir.path(), "questions.txt", "alpha beta gamma delta\n");

    let mut config = base_config(dir.path());
    config.hyperbolic_files = vec![vectors];
    config.analogy.questions_file = questions;

    let run = EvaluationHarness::new(config).unwrap().run_analogy().unwrap();
    let accuracy = run.files[0].result().unwrap();
    assert_eq!(accuracy.processed, 0);
    assert_eq!(accuracy.skipped, 1);
    assert!(accuracy.accuracy.is_nan());
}

#[test]
fn test_thread_count_does_not_change_results() {
    let dir = TempDir::new().unwrap();
    let vectors = write_file(dir.path(), "line.csv", &line_csv(6));
    let questions = write_file(dir.path(), "questions.txt", line_questions());

    let accuracies: Vec<_> = [Some(1), Some(3), None]
        .into_iter()
        .map(|threads| {
            let mut config = base_config(dir.path());
            config.hyperbolic_files = vec![vectors.clone()];
            config.analogy.questions_file = questions.clone();
            config.threads = threads;
            let run = EvaluationHarness::new(config).unwrap().run_analogy().unwrap();
            run.files[0].result().unwrap().clone()
        })
        .collect();

    assert_eq!(accuracies[0].correct, accuracies[1].correct);
    assert_eq!(accuracies[1].correct, accuracies[2].correct);
    assert_eq!(accuracies[0].processed, accuracies[2].processed);
}

// ========== FAILURES AND REPORTS ==========

#[test]
fn test_unreadable_file_does_not_abort_run() {
    let dir = TempDir::new().unwrap();
    let good = write_file(dir.path(), "line.csv", &line_csv(6));
    let empty = write_file(dir.path(), "empty.csv", "");
    let missing = dir.path().join("missing.csv");
    let questions = write_file(dir.path(), "questions.txt", line_questions());

    let mut config = base_config(dir.path());
    config.hyperbolic_files = vec![missing, empty, good.clone()];
    config.analogy.questions_file = questions;

    let harness = EvaluationHarness::new(config).unwrap();
    let run = harness.run_analogy().unwrap();
    assert_eq!(run.files.len(), 3);
    assert_eq!(run.failures().count(), 2);
    assert!(matches!(run.files[0].status, FileStatus::Failed { .. }));
    match &run.files[1].status {
        FileStatus::Failed { error } => assert!(error.contains("No records")),
        other => panic!("expected failure, got {:?}", other),
    }

    let written = write_report(&run, ReportFormat::Both, &harness.config().output_dir).unwrap();
    assert_eq!(written.len(), 2);

    let tsv = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(tsv, format!("{}\t1.0\n", good.display()));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written[1]).unwrap()).unwrap();
    assert_eq!(json["metadata"]["task"], "analogy");
    assert_eq!(json["metadata"]["files_failed"], 2);
    assert_eq!(json["run"]["files"][2]["status"]["completed"]["correct"], 3);
}

#[test]
fn test_missing_questions_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = base_config(dir.path());
    config.analogy.questions_file = dir.path().join("nope.txt");

    let harness = EvaluationHarness::new(config).unwrap();
    assert!(harness.run_analogy().is_err());
}

#[test]
fn test_config_file_drives_harness() {
    let dir = TempDir::new().unwrap();
    let vectors = write_file(dir.path(), "line.csv", &line_csv(6));
    let questions = write_file(dir.path(), "questions.txt", line_questions());
    let config_path = write_file(
        dir.path(),
        "eval.toml",
        &format!(
            "hyperbolic_files = [{:?}]\nthreads = 2\n\n[analogy]\nquestions_file = {:?}\nmax_questions = 2\n",
            vectors.display().to_string(),
            questions.display().to_string()
        ),
    );

    let config = EvaluationConfig::from_file(&config_path).unwrap();
    assert_eq!(config.threads, Some(2));

    let run = EvaluationHarness::new(config).unwrap().run_analogy().unwrap();
    assert_eq!(run.files[0].result().unwrap().total, 2);
}

#[test]
fn test_invalid_config_rejected_by_harness() {
    let mut config = EvaluationConfig::default();
    config.analogy.candidates = 2;
    assert!(EvaluationHarness::new(config).is_err());
}
