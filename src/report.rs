//! Prediction output formatting

/// Format a prediction with exactly 6 digits after the decimal point
pub fn format_prediction(value: f64) -> String {
    format!("{:.6}", value)
}

/// Print each prediction on its own line, in input order
pub fn emit(predictions: &[f64]) {
    for prediction in predictions {
        println!("{}", format_prediction(*prediction));
    }
}
