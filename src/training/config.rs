//! Tree configuration

use serde::{Deserialize, Serialize};

/// Which columns an [`Id3Tree`](super::Id3Tree) learns from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Target label column; the final dataset column when unset
    pub target_column: Option<String>,
    /// Candidate attributes in tie-break order; every non-target column when unset
    pub attributes: Option<Vec<String>>,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target column
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target_column = Some(target.into());
        self
    }

    /// Restrict and order the candidate attributes
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }
}
