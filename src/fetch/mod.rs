//! Artifact fetching from an IPFS HTTP gateway
//!
//! Fetches are sequential and unretried: the first failure aborts the
//! whole run. Each completed fetch overwrites its destination file.

use crate::errors::{PredictError, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Fixed artifact filenames inside the output directory
pub const DATASET_FILE: &str = "dataset.csv";
pub const MODEL_FILE: &str = "model.json";
pub const SCALER_FILE: &str = "scaler.json";

/// HTTP client for a content-addressed storage gateway
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for a gateway host (https assumed)
    pub fn new(host: &str) -> Result<Self> {
        Self::from_base_url(format!("https://{}", host))
    }

    /// Create a client from a full base URL (scheme included)
    pub fn from_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Gateway URL for a content identifier
    pub fn url_for(&self, cid: &str) -> String {
        format!("{}/ipfs/{}", self.base_url, cid)
    }

    /// Fetch a CID and write the full body to `dest`, overwriting any
    /// existing file. Non-success HTTP status maps to `Transfer`.
    pub async fn fetch_to_path(&self, cid: &str, dest: &Path) -> Result<()> {
        let url = self.url_for(cid);
        debug!(cid, url = url.as_str(), "fetching artifact");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(PredictError::Transfer {
                cid: cid.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        tokio::fs::write(dest, &body).await?;

        info!(cid, dest = %dest.display(), bytes = body.len(), "artifact downloaded");
        Ok(())
    }
}
