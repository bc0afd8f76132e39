//! HTTP client for fetching the temperature dataset.
//!
//! One GET against a fixed URL, bounded by a client timeout; no retry.
//! A failed fetch surfaces as a `DatasetError` for the caller to log.

use log::info;

use crate::dataset::Dataset;
use crate::error::{DatasetError, Result};

/// Upstream location of the monthly global land-surface temperature
/// dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Request timeout in seconds. The upstream file is ~200KB.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Fetch and parse the dataset from `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    info!("Fetching dataset from {}", url);
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(DatasetError::HttpStatus(response.status().as_u16()));
    }

    let body = response.text().await?;
    let dataset = Dataset::from_json_str(&body)?;
    info!(
        "Fetched {} monthly variance records (base temperature {}°C)",
        dataset.monthly_variance.len(),
        dataset.base_temperature
    );
    Ok(dataset)
}
