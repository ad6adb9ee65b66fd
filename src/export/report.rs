//! Plain-text report files

use crate::data::Dataset;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the dataset, its target label and the tree trace to a text file
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Assemble the report text
    pub fn render(dataset: &Dataset, target: &str, tree_trace: &str) -> String {
        let mut out = String::new();
        out.push_str("\n\n");
        out.push_str(&dataset.to_string());
        out.push_str("\n\nTarget label: ");
        out.push_str(target);
        out.push_str("\n\nInduction tree:\n");
        out.push_str(tree_trace);
        out.push_str("\n\n");
        out
    }

    /// Write the report, replacing any existing file
    pub fn write(&self, dataset: &Dataset, target: &str, tree_trace: &str) -> Result<()> {
        let report = Self::render(dataset, target, tree_trace);
        std::fs::write(&self.path, report)?;
        info!(path = %self.path.display(), "Tree saved to file");
        Ok(())
    }
}
