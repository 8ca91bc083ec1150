//! Binary-level checks for the usage path
//!
//! Runs the built `predict` binary directly: too few CIDs must print the
//! usage line to stdout and exit 1 before any client exists.

use std::process::Command;

const USAGE_LINE: &str = "Usage: predict <datasetCID> <modelCID> <scalerCID>";

fn run_predict(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_predict"))
        .args(args)
        .output()
        .expect("failed to spawn predict binary")
}

#[test]
fn test_two_arguments_prints_usage_and_exits_one() {
    let output = run_predict(&["QmDatasetCid", "QmModelCid"]);

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), USAGE_LINE);
    // The usage line is the only stdout output: no predictions were made
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_no_arguments_prints_usage_and_exits_one() {
    let output = run_predict(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        USAGE_LINE
    );
}
