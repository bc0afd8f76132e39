//! Render the heatmap SVG from a fetched or local dataset.

use glst_chart::{build_chart, ChartConfig};
use glst_data::client::fetch_dataset;
use glst_data::Dataset;
use log::{error, info};

/// Load the dataset and write the rendered SVG to `output`.
///
/// A load failure (network, HTTP status, JSON parse, file read) is
/// logged and swallowed: no output file is written and the command
/// still exits cleanly, leaving the chart unrendered.
pub async fn run_render(url: &str, input: Option<&str>, output: &str) -> anyhow::Result<()> {
    let loaded = match input {
        Some(path) => Dataset::from_file(std::path::Path::new(path)),
        None => fetch_dataset(url).await,
    };

    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Error fetching data: {}", e);
            return Ok(());
        }
    };

    let chart = build_chart(&dataset, ChartConfig::default())?;
    std::fs::write(output, chart.to_svg())?;
    info!("Wrote {} cells to {}", chart.cells().len(), output);
    Ok(())
}
