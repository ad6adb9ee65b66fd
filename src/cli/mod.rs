//! Command-line interface
//!
//! Builds single trees, runs dataset batches and predicts with saved trees.

mod batch;

pub use batch::{run_batch, run_job, BatchConfig, BatchJob, BatchSummary, JobOutcome, JobReport};

use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::export::ReportWriter;
use crate::training::Id3Tree;
use crate::utils::{DataLoader, DataSaver};

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn dim(s: &str) -> ColoredString    { s.truecolor(100, 100, 100) }
fn accent(s: &str) -> ColoredString { s.truecolor(120, 170, 255) }
fn muted(s: &str) -> ColoredString  { s.truecolor(140, 140, 140) }
fn ok(s: &str) -> ColoredString     { s.truecolor(100, 210, 120) }
fn fail(s: &str) -> ColoredString   { s.truecolor(230, 100, 100) }

fn step_ok(msg: &str) {
    println!("  {} {}", ok("✓"), msg);
}

fn step_fail(msg: &str) {
    println!("  {} {}", fail("✗"), msg);
}

fn step_run(msg: &str) {
    print!("  {} {}... ", accent("›"), msg);
}

fn step_done(detail: &str) {
    println!("{} {}", ok("done"), dim(detail));
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "id3-tree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "ID3 decision tree induction over categorical CSV data")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a tree from one CSV file
    Build {
        /// Input CSV file (header row, target label in the final column)
        #[arg(short, long)]
        data: PathBuf,

        /// Target column name (defaults to the final column)
        #[arg(short, long)]
        target: Option<String>,

        /// Report file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save the fitted tree as JSON
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,
    },

    /// Build trees for a batch of datasets
    Batch {
        /// JSON batch definition; the three bundled datasets when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Predict labels with a saved tree
    Predict {
        /// Saved tree (JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Input CSV file
        #[arg(short, long)]
        data: PathBuf,

        /// Output predictions file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,
    },
}

fn loader_for(delimiter: char) -> anyhow::Result<DataLoader> {
    if !delimiter.is_ascii() {
        anyhow::bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    Ok(DataLoader::new().with_delimiter(delimiter as u8))
}

fn path_str(path: &Path) -> anyhow::Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow::anyhow!("Path is not valid UTF-8: {}", path.display()))
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_build(
    data_path: &Path,
    target: Option<&str>,
    output: Option<&Path>,
    model_path: Option<&Path>,
    delimiter: char,
) -> anyhow::Result<()> {
    section("Build");

    step_run("Loading data");
    let start = Instant::now();
    let data = loader_for(delimiter)?.load_csv(data_path)?;
    step_done(&format!("{} rows × {} cols in {:?}", data.n_rows(), data.n_cols(), start.elapsed()));

    let mut tree = Id3Tree::new();
    if let Some(target) = target {
        tree = tree.with_target(target);
    }

    step_run("Inducing tree");
    let start = Instant::now();
    tree.fit(&data)?;
    step_done(&format!("{:?}", start.elapsed()));

    let trace = tree.format()?;
    let accuracy = tree.accuracy(&data)?;

    println!();
    println!("  {:<16} {}", muted("Target"), tree.target().white().bold());
    println!("  {:<16} {}", muted("Depth"), tree.depth());
    println!("  {:<16} {}", muted("Leaves"), tree.n_leaves());
    println!("  {:<16} {}", muted("Train accuracy"), format!("{:.4}", accuracy).white().bold());

    section("Tree");
    println!("{}", trace);

    if let Some(output) = output {
        ReportWriter::new(output).write(&data, tree.target(), &trace)?;
        step_ok(&format!("Tree saved to file '{}'", output.display()));
    }

    if let Some(model_path) = model_path {
        tree.save(path_str(model_path)?)?;
        step_ok(&format!("Model saved to '{}'", model_path.display()));
    }

    println!();
    Ok(())
}

pub fn cmd_batch(config_path: Option<&Path>) -> anyhow::Result<()> {
    section("Batch");

    let config = match config_path {
        Some(path) => BatchConfig::from_json_file(path)?,
        None => BatchConfig::default(),
    };

    let summary = run_batch(&config, &DataLoader::new());
    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(report) => step_ok(&format!(
                "Tree saved to file '{}' {}",
                report.output.display(),
                dim(&format!("(depth {}, {} leaves)", report.depth, report.n_leaves))
            )),
            Err(e) => step_fail(&format!("{}: {}", outcome.job.input.display(), e)),
        }
    }

    println!();
    if summary.failed() > 0 {
        anyhow::bail!("{} of {} datasets failed", summary.failed(), summary.outcomes.len());
    }
    Ok(())
}

pub fn cmd_predict(
    model_path: &Path,
    data_path: &Path,
    output: Option<&Path>,
    delimiter: char,
) -> anyhow::Result<()> {
    section("Predict");

    step_run("Loading model");
    let tree = Id3Tree::load(path_str(model_path)?)?;
    step_done(&format!("target '{}', {} leaves", tree.target(), tree.n_leaves()));

    step_run("Loading data");
    let data = loader_for(delimiter)?.load_csv(data_path)?;
    step_done(&format!("{} rows", data.n_rows()));

    let predictions = tree.predict(&data)?;

    match output {
        Some(path) => {
            DataSaver::save_predictions(&predictions, path)?;
            step_ok(&format!("Predictions saved to '{}'", path.display()));
        }
        None => {
            println!();
            for (idx, label) in predictions.iter().enumerate() {
                println!("  {:>6}  {}", muted(&idx.to_string()), label);
            }
        }
    }

    println!();
    Ok(())
}
