//! Tabular dataset loading and the fixed feature schema
//!
//! A row keeps every CSV column as a raw cell so non-feature columns
//! survive sampling; the five feature fields are projected in schema
//! order only when the transformer needs a numeric vector.

pub mod sampler;

pub use sampler::{select_rows, SamplingMode, ROWS_PER_BATCH};

use crate::errors::{PredictError, Result};
use std::collections::HashMap;
use std::path::Path;

/// The fixed, order-sensitive feature schema the model was trained on
pub const FEATURE_FIELDS: [&str; 5] = [
    "Hours Studied",
    "Previous Scores",
    "Extracurricular Activities",
    "Sleep Hours",
    "Sample Question Papers Practiced",
];

/// Number of features per row
pub const FEATURE_COUNT: usize = FEATURE_FIELDS.len();

/// One dataset row: column name to raw cell value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    columns: HashMap<String, String>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column to a numeric value
    pub fn set_numeric(&mut self, field: &str, value: f64) {
        self.columns.insert(field.to_string(), value.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.columns.get(field).map(String::as_str)
    }

    /// Project the row to the 5-field numeric vector in schema order.
    ///
    /// Fails with `Schema` naming the first field that is absent or
    /// cannot be parsed as a number.
    pub fn feature_vector(&self) -> Result<[f64; FEATURE_COUNT]> {
        let mut vector = [0.0; FEATURE_COUNT];
        for (i, field) in FEATURE_FIELDS.iter().enumerate() {
            let cell = self.columns.get(*field).ok_or_else(|| PredictError::Schema {
                field: (*field).to_string(),
            })?;
            vector[i] = cell.trim().parse::<f64>().map_err(|_| PredictError::Schema {
                field: (*field).to_string(),
            })?;
        }
        Ok(vector)
    }
}

/// An ordered sequence of rows loaded from a CSV source
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<FeatureRow>,
}

impl Dataset {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    /// Load a header-aware CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = FeatureRow::new();
            for (header, cell) in headers.iter().zip(record.iter()) {
                row.columns.insert(header.clone(), cell.to_string());
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
