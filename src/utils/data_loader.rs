//! CSV loading into categorical datasets

use crate::data::{Category, Dataset};
use crate::error::{Id3Error, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Loads delimited text files as [`Dataset`]s.
///
/// Every column, the target label included, is read verbatim as text, so a
/// cell such as `1.50` stays the token `1.50`.
#[derive(Debug, Clone)]
pub struct DataLoader {
    /// Field separator
    delimiter: u8,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    /// Create a comma-separated loader
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field separator
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a CSV file with a header row into a polars frame of string columns
    pub fn load_frame(&self, path: impl AsRef<Path>) -> Result<DataFrame> {
        let file = File::open(path.as_ref())?;

        let parse_opts = CsvParseOptions::default().with_separator(self.delimiter);

        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_parse_options(parse_opts)
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|e| Id3Error::DataError(e.to_string()))
    }

    /// Load a CSV file as a dataset
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let df = self.load_frame(path)?;
        let dataset = frame_to_dataset(&df)?;
        info!(
            path = %path.display(),
            rows = dataset.n_rows(),
            cols = dataset.n_cols(),
            "Loaded dataset"
        );
        Ok(dataset)
    }
}

/// Convert a polars frame into a dataset, casting every column to text.
///
/// Frames without rows and frames with missing cells are rejected.
pub fn frame_to_dataset(df: &DataFrame) -> Result<Dataset> {
    let columns: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
    let n_rows = df.height();
    if n_rows == 0 {
        return Err(Id3Error::DataError("dataset has no rows".to_string()));
    }

    let mut rows: Vec<Vec<Category>> = vec![Vec::with_capacity(columns.len()); n_rows];
    for name in &columns {
        let column = df.column(name)?.cast(&DataType::String)?;
        let values = column.as_materialized_series().str()?;
        for (idx, value) in values.into_iter().enumerate() {
            match value {
                Some(v) => rows[idx].push(Category::new(v)),
                None => {
                    return Err(Id3Error::DataError(format!(
                        "missing value in column '{}' at row {}",
                        name, idx
                    )))
                }
            }
        }
    }

    Dataset::new(columns, rows)
}

/// Writes predictions back out as CSV
pub struct DataSaver;

impl DataSaver {
    /// Save a single `prediction` column
    pub fn save_predictions(predictions: &[Category], path: impl AsRef<Path>) -> Result<()> {
        let values: Vec<String> = predictions.iter().map(|p| p.to_string()).collect();
        let mut df = DataFrame::new(vec![Column::new("prediction".into(), values)])?;

        let mut file = File::create(path.as_ref())?;
        CsvWriter::new(&mut file)
            .finish(&mut df)
            .map_err(|e| Id3Error::DataError(e.to_string()))
    }
}
