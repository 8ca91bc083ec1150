//! Command-line argument parsing for gradecast
//!
//! The three CIDs are positional and optional at the parser level so the
//! program itself controls the usage message and exit code when they are
//! missing (usage goes to stdout, exit 1, no network call).

use crate::dataset::SamplingMode;
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: predict <datasetCID> <modelCID> <scalerCID>";

/// gradecast - fetch artifacts by CID and emit score predictions
#[derive(Parser, Debug)]
#[command(name = "predict")]
#[command(version = "0.1.0")]
#[command(about = "Fetch dataset/model/scaler from an IPFS gateway and print 3 predictions", long_about = None)]
pub struct Args {
    /// CID of the CSV dataset
    #[arg(value_name = "datasetCID")]
    pub dataset_cid: Option<String>,

    /// CID of the trained regression model artifact
    #[arg(value_name = "modelCID")]
    pub model_cid: Option<String>,

    /// CID of the fitted feature scaler artifact
    #[arg(value_name = "scalerCID")]
    pub scaler_cid: Option<String>,

    /// Gateway host to fetch from
    #[arg(long)]
    pub gateway: Option<String>,

    /// Row-selection policy when the dataset has 3 or more rows
    #[arg(long, value_enum)]
    pub sampling_mode: Option<SamplingMode>,

    /// Directory the artifact files are written into (current dir by default)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except predictions and errors)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Get the artifact output directory (current dir if not specified)
    pub fn working_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    /// Check that all three CIDs were supplied
    pub fn validate(&self) -> Result<(String, String, String), String> {
        match (&self.dataset_cid, &self.model_cid, &self.scaler_cid) {
            (Some(d), Some(m), Some(s)) => Ok((d.clone(), m.clone(), s.clone())),
            _ => Err(USAGE.to_string()),
        }
    }
}
