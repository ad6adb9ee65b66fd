//! Categorical dataset types
//!
//! A [`Dataset`] is a header of column names plus rows of [`Category`]
//! tokens. Values are only ever compared for equality; nothing here
//! orders or parses them.

use crate::error::{Id3Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Opaque categorical value (attribute value or target label)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Arc<str>);

impl Category {
    pub fn new(value: &str) -> Self {
        Self(Arc::from(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Count occurrences of each distinct value, in order of first appearance.
pub fn value_counts<'a, I>(values: I) -> Vec<(&'a Category, usize)>
where
    I: IntoIterator<Item = &'a Category>,
{
    let mut counts: Vec<(&'a Category, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Most frequent value; ties go to the value seen first.
pub fn majority<'a, I>(values: I) -> Option<&'a Category>
where
    I: IntoIterator<Item = &'a Category>,
{
    let mut best: Option<(&'a Category, usize)> = None;
    for (value, count) in value_counts(values) {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Tabular categorical dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Category>>,
}

impl Dataset {
    /// Create a dataset, checking that the header is usable and every row matches it
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Category>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Id3Error::ValidationError("dataset has no columns".to_string()));
        }

        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(Id3Error::ValidationError(format!("duplicate column '{}'", name)));
            }
        }

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns.len()) {
            return Err(Id3Error::ValidationError(format!(
                "row {} has {} values, expected {}",
                idx,
                row.len(),
                columns.len()
            )));
        }

        Ok(Self { columns, rows })
    }

    /// Build a dataset from string literals
    pub fn from_records<S: AsRef<str>>(columns: &[S], records: &[Vec<S>]) -> Result<Self> {
        let columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        let rows = records
            .iter()
            .map(|r| r.iter().map(|v| Category::new(v.as_ref())).collect())
            .collect();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> &[Category] {
        &self.rows[idx]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Category]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn value(&self, row: usize, col: usize) -> &Category {
        &self.rows[row][col]
    }

    /// Resolve a column name to its index
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Id3Error::FeatureNotFound(name.to_string()))
    }

    /// The final column, which holds the target label by convention
    pub fn default_target(&self) -> &str {
        // Construction guarantees at least one column.
        &self.columns[self.columns.len() - 1]
    }

    /// Values of one column for the given rows
    pub fn column_values<'a>(&'a self, col: usize, subset: &'a [usize]) -> impl Iterator<Item = &'a Category> + 'a {
        subset.iter().map(move |&r| &self.rows[r][col])
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(col, name)| {
                self.rows
                    .iter()
                    .map(|row| row[col].as_str().chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:width$}", "", width = index_width)?;
        for (name, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", name, width = *width)?;
        }

        for (idx, row) in self.rows.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<width$}", idx, width = index_width)?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {:>width$}", value.as_str(), width = *width)?;
            }
        }
        Ok(())
    }
}
