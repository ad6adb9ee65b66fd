//! Sequential batch driver: load, induce, render and report per dataset

use crate::error::{Id3Error, Result};
use crate::export::ReportWriter;
use crate::training::Id3Tree;
use crate::utils::DataLoader;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// One dataset to process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchJob {
    /// Input CSV file
    pub input: PathBuf,
    /// Report file to (over)write
    pub output: PathBuf,
    /// Target column; the final column when unset
    #[serde(default)]
    pub target: Option<String>,
}

impl BatchJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            target: None,
        }
    }
}

/// Batch of datasets, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub jobs: Vec<BatchJob>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: vec![
                BatchJob::new("weather.nominal.csv", "arvore - tenis.txt"),
                BatchJob::new("anamnese.csv", "arvore - anamnese.txt"),
                BatchJob::new("tabelavinho.csv", "arvore - vinho.txt"),
            ],
        }
    }
}

impl BatchConfig {
    /// Load a batch definition such as `{"jobs": [{"input": "a.csv", "output": "a.txt"}]}`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        if config.jobs.is_empty() {
            return Err(Id3Error::ValidationError("batch config lists no jobs".to_string()));
        }
        Ok(config)
    }
}

/// What a successful job produced
#[derive(Debug, Clone, PartialEq)]
pub struct JobReport {
    pub output: PathBuf,
    pub target: String,
    pub n_rows: usize,
    pub depth: usize,
    pub n_leaves: usize,
}

/// Result of one job
#[derive(Debug)]
pub struct JobOutcome {
    pub job: BatchJob,
    pub result: Result<JobReport>,
}

/// Results of a whole batch, in job order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Process one dataset end to end
pub fn run_job(job: &BatchJob, loader: &DataLoader) -> Result<JobReport> {
    let data = loader.load_csv(&job.input)?;

    let mut tree = Id3Tree::new();
    if let Some(target) = &job.target {
        tree = tree.with_target(target.clone());
    }
    tree.fit(&data)?;

    let trace = tree.format()?;
    ReportWriter::new(&job.output).write(&data, tree.target(), &trace)?;

    Ok(JobReport {
        output: job.output.clone(),
        target: tree.target().to_string(),
        n_rows: data.n_rows(),
        depth: tree.depth(),
        n_leaves: tree.n_leaves(),
    })
}

/// Run every job in order; a failing job does not stop the rest
pub fn run_batch(config: &BatchConfig, loader: &DataLoader) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for job in &config.jobs {
        let result = run_job(job, loader);
        match &result {
            Ok(report) => info!(
                input = %job.input.display(),
                output = %report.output.display(),
                depth = report.depth,
                "Dataset processed"
            ),
            Err(e) => error!(input = %job.input.display(), error = %e, "Dataset failed"),
        }
        summary.outcomes.push(JobOutcome {
            job: job.clone(),
            result,
        });
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jobs() {
        let config = BatchConfig::default();
        assert_eq!(config.jobs.len(), 3);
        assert_eq!(config.jobs[0].input, PathBuf::from("weather.nominal.csv"));
        assert_eq!(config.jobs[2].output, PathBuf::from("arvore - vinho.txt"));
        assert!(config.jobs.iter().all(|j| j.target.is_none()));
    }

    #[test]
    fn test_config_from_json() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"jobs": [{"input": "a.csv", "output": "a.txt"}, {"input": "b.csv", "output": "b.txt", "target": "class"}]}"#,
        )
        .unwrap();
        let config = BatchConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.jobs.len(), 2);
        assert_eq!(config.jobs[1].target.as_deref(), Some("class"));
    }

    #[test]
    fn test_config_without_jobs_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"jobs": []}"#).unwrap();
        assert!(matches!(
            BatchConfig::from_json_file(file.path()),
            Err(Id3Error::ValidationError(_))
        ));
    }

    #[test]
    fn test_run_job_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("toy.csv");
        std::fs::write(&input, "shape,label\nround,ball\nflat,disc\nround,ball\n").unwrap();
        let job = BatchJob::new(&input, dir.path().join("toy.txt"));

        let report = run_job(&job, &DataLoader::new()).unwrap();
        assert_eq!(report.target, "label");
        assert_eq!(report.n_rows, 3);
        assert_eq!(report.n_leaves, 2);

        let text = std::fs::read_to_string(&report.output).unwrap();
        assert!(text.ends_with("Induction tree:\n\nshape = round: ball\nshape = flat: disc\n\n"));
    }
}
