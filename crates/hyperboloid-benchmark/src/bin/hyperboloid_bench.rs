//! Hyperboloid embedding benchmark CLI
//!
//! ```bash
//! hyperboloid-bench -v analogy --hyperbolic vecs.csv --euclidean vecs.vec
//! hyperboloid-bench --config eval.toml similarity --format both
//! hyperboloid-bench train --input wikipedia.txt --dry-run
//! ```
//!
//! Settings come from `--config` (TOML) when given, otherwise from the
//! built-in defaults; command-line flags override either.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use hyperboloid_benchmark::reports::tsv::format_score;
use hyperboloid_benchmark::training::{plan_jobs, sweep};
use hyperboloid_benchmark::{
    write_report, EvaluationConfig, EvaluationHarness, EvaluationRun, FileStatus, ReportFormat,
    SubprocessTrainer, SummaryScore,
};

/// Word analogy and similarity benchmarks for hyperbolic and Euclidean embeddings
#[derive(Parser)]
#[command(name = "hyperboloid-bench")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top-1 analogy accuracy for every embedding file
    Analogy {
        #[command(flatten)]
        files: FileArgs,

        /// word2vec-format questions file
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Evaluate a seeded random subset of this many questions
        #[arg(long)]
        max_questions: Option<usize>,

        /// Hyperbolic neighbours fetched before excluding the query words
        #[arg(long)]
        candidates: Option<usize>,

        /// Seed for --max-questions sampling
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Spearman correlation against gold similarity datasets
    Similarity {
        #[command(flatten)]
        files: FileArgs,

        /// Directory holding the gold similarity files
        #[arg(long)]
        similarity_dir: Option<PathBuf>,

        /// Dataset file names inside the similarity directory
        #[arg(long, value_delimiter = ',')]
        datasets: Vec<String>,
    },
    /// Train hyperbolic and Euclidean embeddings over the learning-rate x dimension grid
    Train {
        /// Training corpus
        #[arg(long)]
        input: Option<PathBuf>,

        /// Directory receiving the trained vectors
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Minkowski trainer executable
        #[arg(long)]
        minkowski_bin: Option<PathBuf>,

        /// fastText executable
        #[arg(long)]
        fasttext_bin: Option<PathBuf>,

        #[arg(long, value_delimiter = ',')]
        learning_rates: Vec<f64>,

        #[arg(long, value_delimiter = ',')]
        dimensions: Vec<usize>,

        /// Print the trainer commands without running them
        #[arg(long)]
        dry_run: bool,
    },
}

/// Embedding files and output options shared by the evaluation commands.
#[derive(Args)]
struct FileArgs {
    /// Hyperboloid embedding file (repeatable)
    #[arg(long)]
    hyperbolic: Vec<PathBuf>,

    /// fastText embedding file (repeatable)
    #[arg(long)]
    euclidean: Vec<PathBuf>,

    /// Directory receiving result files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Report format: tsv, json or both
    #[arg(long, default_value = "tsv")]
    format: ReportFormat,

    /// Worker threads for question scoring
    #[arg(long)]
    threads: Option<usize>,
}

impl FileArgs {
    fn apply(self, config: &mut EvaluationConfig) -> ReportFormat {
        if !self.hyperbolic.is_empty() {
            config.hyperbolic_files = self.hyperbolic;
        }
        if !self.euclidean.is_empty() {
            config.euclidean_files = self.euclidean;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        self.format
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => EvaluationConfig::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => EvaluationConfig::default(),
    };

    match cli.command {
        Commands::Analogy {
            files,
            questions,
            max_questions,
            candidates,
            seed,
        } => {
            let format = files.apply(&mut config);
            if let Some(path) = questions {
                config.analogy.questions_file = path;
            }
            if max_questions.is_some() {
                config.analogy.max_questions = max_questions;
            }
            if let Some(n) = candidates {
                config.analogy.candidates = n;
            }
            if let Some(seed) = seed {
                config.analogy.seed = seed;
            }

            let harness = EvaluationHarness::new(config)?;
            let run = harness.run_analogy()?;
            for file in &run.files {
                if let FileStatus::Completed(acc) = &file.status {
                    println!(
                        "{}\t{}\t({}/{} processed, {} correct)",
                        file.identifier,
                        format_score(acc.accuracy),
                        acc.processed,
                        acc.total,
                        acc.correct
                    );
                }
            }
            finish(&run, format, &harness)
        }
        Commands::Similarity {
            files,
            similarity_dir,
            datasets,
        } => {
            let format = files.apply(&mut config);
            if let Some(dir) = similarity_dir {
                config.similarity.data_dir = dir;
            }
            if !datasets.is_empty() {
                config.similarity.datasets = datasets;
            }

            let harness = EvaluationHarness::new(config)?;
            let run = harness.run_similarity()?;
            for file in &run.files {
                if let FileStatus::Completed(eval) = &file.status {
                    println!("{}\t{}", file.identifier, format_score(eval.weighted_rho));
                    for d in &eval.datasets {
                        println!(
                            "    {:<24} pairs {:>6}  not found {:>6}  rho {}",
                            d.dataset,
                            d.total_size,
                            d.not_found,
                            format_score(d.rho)
                        );
                    }
                }
            }
            finish(&run, format, &harness)
        }
        Commands::Train {
            input,
            output_dir,
            minkowski_bin,
            fasttext_bin,
            learning_rates,
            dimensions,
            dry_run,
        } => {
            let training = &mut config.training;
            if let Some(path) = input {
                training.input_file = path;
            }
            if let Some(dir) = output_dir {
                training.output_dir = dir;
            }
            if let Some(bin) = minkowski_bin {
                training.minkowski_binary = bin;
            }
            if let Some(bin) = fasttext_bin {
                training.fasttext_binary = bin;
            }
            if !learning_rates.is_empty() {
                training.learning_rates = learning_rates;
            }
            if !dimensions.is_empty() {
                training.dimensions = dimensions;
            }
            config.validate()?;

            let trainer = SubprocessTrainer::from_config(&config.training);
            if dry_run {
                for job in plan_jobs(&config.training) {
                    println!("{:?}", trainer.command(&job));
                }
                return Ok(());
            }

            let outcome = sweep(&trainer, &config.training);
            for path in outcome.hyperbolic_files.iter().chain(&outcome.euclidean_files) {
                println!("{}", path.display());
            }
            for failure in &outcome.failures {
                eprintln!("failed: {}: {}", failure.job.output_stem(), failure.error);
            }
            if outcome.hyperbolic_files.is_empty() && outcome.euclidean_files.is_empty() {
                bail!("every training job failed");
            }
            Ok(())
        }
    }
}

/// Write the reports, surface per-file failures, and fail if no file was scored.
fn finish<T>(run: &EvaluationRun<T>, format: ReportFormat, harness: &EvaluationHarness) -> Result<()>
where
    T: serde::Serialize + SummaryScore,
{
    let written = write_report(run, format, &harness.config().output_dir)?;
    for path in &written {
        eprintln!("wrote {}", path.display());
    }

    let failed = run.failures().count();
    for file in run.failures() {
        if let FileStatus::Failed { error } = &file.status {
            eprintln!("failed: {}: {}", file.identifier, error);
        }
    }
    if run.files.is_empty() {
        bail!("no embedding files given; use --hyperbolic/--euclidean or a config file");
    }
    if failed == run.files.len() {
        bail!("all {} embedding files failed", failed);
    }
    Ok(())
}
