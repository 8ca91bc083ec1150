//! End-to-end prediction pipeline
//!
//! One linear pass: fetch the three artifacts, load the dataset, select
//! rows, normalize, predict. Either all three predictions come back or
//! the first error aborts the run.

use crate::artifacts::{FeatureTransformer, LinearModel, RegressionPredictor, StandardScaler};
use crate::dataset::{select_rows, Dataset, FeatureRow, SamplingMode, FEATURE_COUNT};
use crate::errors::Result;
use crate::fetch::{GatewayClient, DATASET_FILE, MODEL_FILE, SCALER_FILE};
use std::path::PathBuf;
use tracing::{debug, info};

/// The prediction pipeline, configured once per run
pub struct Pipeline {
    client: GatewayClient,
    output_dir: PathBuf,
    sampling_mode: SamplingMode,
}

impl Pipeline {
    pub fn new(client: GatewayClient, output_dir: PathBuf, sampling_mode: SamplingMode) -> Self {
        Self {
            client,
            output_dir,
            sampling_mode,
        }
    }

    /// Fetch everything and produce exactly 3 predictions
    pub async fn run(
        &self,
        dataset_cid: &str,
        model_cid: &str,
        scaler_cid: &str,
    ) -> Result<Vec<f64>> {
        let dataset_path = self.output_dir.join(DATASET_FILE);
        let model_path = self.output_dir.join(MODEL_FILE);
        let scaler_path = self.output_dir.join(SCALER_FILE);

        // Sequential fetches, first failure aborts
        self.client.fetch_to_path(dataset_cid, &dataset_path).await?;
        self.client.fetch_to_path(model_cid, &model_path).await?;
        self.client.fetch_to_path(scaler_cid, &scaler_path).await?;

        let dataset = Dataset::from_csv_path(&dataset_path)?;
        info!(rows = dataset.len(), "dataset loaded");

        let scaler = StandardScaler::load(&scaler_path)?;
        let model = LinearModel::load(&model_path)?;

        let rows = select_rows(&dataset, self.sampling_mode, &mut rand::thread_rng());
        predict_rows(&rows, &scaler, &model)
    }
}

/// Project, normalize, and predict a batch of selected rows
pub fn predict_rows(
    rows: &[FeatureRow],
    scaler: &dyn FeatureTransformer,
    model: &dyn RegressionPredictor,
) -> Result<Vec<f64>> {
    let matrix: Vec<[f64; FEATURE_COUNT]> = rows
        .iter()
        .map(FeatureRow::feature_vector)
        .collect::<Result<_>>()?;

    let normalized = scaler.transform(&matrix)?;
    let predictions = model.predict(&normalized)?;
    debug!(count = predictions.len(), "predictions computed");
    Ok(predictions)
}
