//! Error types for the gradecast prediction pipeline
//!
//! Every failure a run can hit maps onto one of these variants; `main`
//! catches them at a single boundary, prints one line, and exits 1.

use thiserror::Error;

/// Main error type for the prediction pipeline
#[derive(Error, Debug)]
pub enum PredictError {
    /// CLI invoked with too few or invalid arguments
    #[error("{0}")]
    Usage(String),

    /// Gateway answered with a non-success HTTP status
    #[error("transfer of {cid} failed: gateway returned HTTP {status}")]
    Transfer { cid: String, status: u16 },

    /// Transport-level fetch failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Artifact bytes could not be loaded as a model or scaler
    #[error("failed to load artifact {path}: {reason}")]
    Deserialization { path: String, reason: String },

    /// A required feature field is missing or non-numeric in an input row
    #[error("feature field '{field}' is missing or not numeric")]
    Schema { field: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset CSV errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PredictError>;
