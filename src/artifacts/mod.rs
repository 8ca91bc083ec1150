//! Fetched model and scaler artifacts
//!
//! The artifacts are opaque to the pipeline: it only sees the two
//! capability traits below. The JSON layout behind them is a loader
//! implementation detail.

pub mod model;
pub mod scaler;

pub use model::LinearModel;
pub use scaler::StandardScaler;

use crate::dataset::FEATURE_COUNT;
use crate::errors::{PredictError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// A fitted feature-normalization transform
pub trait FeatureTransformer {
    /// Map raw feature vectors to normalized ones, row order preserved
    fn transform(&self, rows: &[[f64; FEATURE_COUNT]]) -> Result<Vec<[f64; FEATURE_COUNT]>>;
}

/// A fitted predictor over normalized feature vectors
pub trait RegressionPredictor {
    /// One float per input row, index-aligned
    fn predict(&self, matrix: &[[f64; FEATURE_COUNT]]) -> Result<Vec<f64>>;
}

/// Read and deserialize a JSON artifact, mapping any failure to
/// `Deserialization` so the caller sees which file was bad.
pub(crate) fn load_json_artifact<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| PredictError::Deserialization {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| PredictError::Deserialization {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
