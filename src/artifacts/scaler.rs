//! Standard scaler artifact

use crate::artifacts::{load_json_artifact, FeatureTransformer};
use crate::dataset::FEATURE_COUNT;
use crate::errors::{PredictError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-column standardization fitted offline: `(x - mean) / scale`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: [f64; FEATURE_COUNT],
    pub scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Load from a JSON artifact file, rejecting degenerate fits
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let scaler: Self = load_json_artifact(&path)?;
        if scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(PredictError::Deserialization {
                path: path.as_ref().display().to_string(),
                reason: "scaler has a zero or non-finite scale entry".to_string(),
            });
        }
        Ok(scaler)
    }
}

impl FeatureTransformer for StandardScaler {
    fn transform(&self, rows: &[[f64; FEATURE_COUNT]]) -> Result<Vec<[f64; FEATURE_COUNT]>> {
        Ok(rows
            .iter()
            .map(|row| {
                let mut normalized = [0.0; FEATURE_COUNT];
                for i in 0..FEATURE_COUNT {
                    normalized[i] = (row[i] - self.mean[i]) / self.scale[i];
                }
                normalized
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_transform_standardizes_per_column() {
        let scaler = StandardScaler {
            mean: [1.0, 2.0, 3.0, 4.0, 5.0],
            scale: [1.0, 2.0, 1.0, 2.0, 1.0],
        };
        let out = scaler.transform(&[[2.0, 6.0, 3.0, 0.0, 10.0]]).unwrap();
        assert_eq!(out, vec![[1.0, 2.0, 0.0, -2.0, 5.0]]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let scaler = StandardScaler {
            mean: [0.5; 5],
            scale: [2.0; 5],
        };
        let rows = [[1.0, 2.0, 3.0, 4.0, 5.0]];
        assert_eq!(scaler.transform(&rows).unwrap(), scaler.transform(&rows).unwrap());
    }

    #[test]
    fn test_load_rejects_zero_scale() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"mean": [0,0,0,0,0], "scale": [1,1,0,1,1]}}"#
        )
        .unwrap();

        assert!(matches!(
            StandardScaler::load(file.path()),
            Err(PredictError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            StandardScaler::load(file.path()),
            Err(PredictError::Deserialization { .. })
        ));
    }
}
