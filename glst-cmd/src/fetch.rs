//! Fetch the dataset and store it locally for offline rendering.

use glst_data::client::fetch_dataset;
use log::info;

/// Download, validate and write the dataset JSON to `output`.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let dataset = fetch_dataset(url).await?;
    let (dataset, skipped) = dataset.sanitized()?;
    if skipped > 0 {
        info!("Dropped {} malformed records before writing", skipped);
    }

    let json = serde_json::to_string(&dataset)?;
    std::fs::write(output, json)?;
    info!(
        "Wrote {} records to {}",
        dataset.monthly_variance.len(),
        output
    );
    Ok(())
}
