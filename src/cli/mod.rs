//! Command-line interface for gradecast

pub mod args;

pub use args::{Args, Verbosity, USAGE};
