//! Row selection for inference
//!
//! Always yields exactly [`ROWS_PER_BATCH`] rows, whatever the dataset
//! size. Two explicit policies exist for datasets with enough rows;
//! smaller datasets always fall back to synthetic generation.

use crate::dataset::{Dataset, FeatureRow, FEATURE_FIELDS};
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of rows selected for every inference batch
pub const ROWS_PER_BATCH: usize = 3;

/// Inclusive bounds for synthetic feature draws
pub const DRAW_MIN: u32 = 1;
pub const DRAW_MAX: u32 = 10_000;

/// Row-selection policy for datasets with at least [`ROWS_PER_BATCH`] rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SamplingMode {
    /// Take the first 3 rows as-is
    #[serde(rename = "first_n")]
    #[value(name = "first_n")]
    FirstN,
    /// Sample 3 rows with replacement, then overwrite every feature
    /// field with a fresh uniform draw in [1, 10000]
    #[serde(rename = "random_with_replacement")]
    #[value(name = "random_with_replacement")]
    RandomWithReplacement,
}

/// Produce exactly 3 rows for inference.
///
/// Cannot fail: an empty or short dataset yields synthetic rows instead.
pub fn select_rows<R: Rng>(dataset: &Dataset, mode: SamplingMode, rng: &mut R) -> Vec<FeatureRow> {
    if dataset.len() < ROWS_PER_BATCH {
        return (0..ROWS_PER_BATCH).map(|_| synthetic_row(rng)).collect();
    }

    match mode {
        SamplingMode::FirstN => dataset.rows()[..ROWS_PER_BATCH].to_vec(),
        SamplingMode::RandomWithReplacement => (0..ROWS_PER_BATCH)
            .map(|_| {
                let index = rng.gen_range(0..dataset.len());
                let mut row = dataset.rows()[index].clone();
                randomize_features(&mut row, rng);
                row
            })
            .collect(),
    }
}

/// Build a row with every feature field drawn uniformly from [1, 10000]
fn synthetic_row<R: Rng>(rng: &mut R) -> FeatureRow {
    let mut row = FeatureRow::new();
    randomize_features(&mut row, rng);
    row
}

/// Overwrite all five feature fields; non-feature columns are untouched
fn randomize_features<R: Rng>(row: &mut FeatureRow, rng: &mut R) {
    for field in FEATURE_FIELDS {
        row.set_numeric(field, f64::from(rng.gen_range(DRAW_MIN..=DRAW_MAX)));
    }
}
