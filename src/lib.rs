//! gradecast - IPFS-backed score prediction CLI
//!
//! Fetches a CSV dataset, a trained linear model, and a fitted feature
//! scaler from a content-addressed storage gateway, selects three input
//! rows, and prints one prediction per row.
//!
//! # Architecture
//!
//! - `fetch`: gateway client, one file per CID
//! - `dataset`: CSV rows, the fixed 5-field schema, row selection
//! - `artifacts`: scaler/model capability traits and their JSON loaders
//! - `pipeline`: the single linear fetch -> select -> transform -> predict pass

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod fetch;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use errors::{PredictError, Result};
