//! Linear regression model artifact

use crate::artifacts::{load_json_artifact, RegressionPredictor};
use crate::dataset::FEATURE_COUNT;
use crate::errors::{PredictError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fitted linear model: dot product with the coefficients plus intercept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: [f64; FEATURE_COUNT],
    pub intercept: f64,
}

impl LinearModel {
    /// Load from a JSON artifact file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let model: Self = load_json_artifact(&path)?;
        if model.coefficients.iter().any(|c| !c.is_finite()) || !model.intercept.is_finite() {
            return Err(PredictError::Deserialization {
                path: path.as_ref().display().to_string(),
                reason: "model has a non-finite coefficient".to_string(),
            });
        }
        Ok(model)
    }
}

impl RegressionPredictor for LinearModel {
    fn predict(&self, matrix: &[[f64; FEATURE_COUNT]]) -> Result<Vec<f64>> {
        Ok(matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.coefficients.iter())
                    .map(|(x, c)| x * c)
                    .sum::<f64>()
                    + self.intercept
            })
            .collect())
    }
}
