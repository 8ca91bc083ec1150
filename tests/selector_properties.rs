//! Property tests for the row selector and output formatting

use gradecast::dataset::{select_rows, Dataset, FeatureRow, SamplingMode, FEATURE_FIELDS};
use gradecast::report::format_prediction;
use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dataset_of(n: usize) -> Dataset {
    let rows = (0..n)
        .map(|i| {
            let mut row = FeatureRow::new();
            for field in FEATURE_FIELDS {
                row.set_numeric(field, (i % 100) as f64);
            }
            row
        })
        .collect();
    Dataset::new(rows)
}

fn features_in_range(row: &FeatureRow) -> bool {
    row.feature_vector()
        .map(|v| v.iter().all(|x| (1.0..=10_000.0).contains(x)))
        .unwrap_or(false)
}

#[quickcheck]
fn prop_selector_always_returns_three_rows(size: u8, seed: u64) -> bool {
    let dataset = dataset_of(size as usize % 50);
    let mut rng = StdRng::seed_from_u64(seed);
    select_rows(&dataset, SamplingMode::RandomWithReplacement, &mut rng).len() == 3
}

#[quickcheck]
fn prop_random_mode_draws_stay_in_range(size: u8, seed: u64) -> bool {
    let dataset = dataset_of(3 + size as usize % 20);
    let mut rng = StdRng::seed_from_u64(seed);
    select_rows(&dataset, SamplingMode::RandomWithReplacement, &mut rng)
        .iter()
        .all(features_in_range)
}

#[quickcheck]
fn prop_short_datasets_generate_in_range(seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..3).all(|n| {
        select_rows(&dataset_of(n), SamplingMode::FirstN, &mut rng)
            .iter()
            .all(features_in_range)
    })
}

#[quickcheck]
fn prop_first_n_keeps_original_values(seed: u64) -> bool {
    let dataset = dataset_of(10);
    let mut rng = StdRng::seed_from_u64(seed);
    let selected = select_rows(&dataset, SamplingMode::FirstN, &mut rng);
    selected
        .iter()
        .zip(dataset.rows())
        .all(|(s, o)| s.feature_vector().unwrap() == o.feature_vector().unwrap())
}

#[quickcheck]
fn prop_formatted_predictions_have_six_decimals(value: f64) -> bool {
    if !value.is_finite() {
        return true;
    }
    let line = format_prediction(value);
    match line.split_once('.') {
        Some((int_part, frac_part)) => {
            int_part.trim_start_matches('-').chars().all(|c| c.is_ascii_digit())
                && frac_part.len() == 6
                && frac_part.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
