//! Legend layout: one labeled swatch per temperature bucket.

use crate::bucket::TempBucket;
use crate::config::ChartConfig;

/// A positioned legend swatch with its color and range label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSwatch {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub label: &'static str,
}

/// Lay out the five swatches left to right in bucket order, coldest
/// first. The y placement (below the plot) is applied at render time.
pub fn layout_legend(config: &ChartConfig) -> Vec<LegendSwatch> {
    TempBucket::ALL
        .iter()
        .enumerate()
        .map(|(i, bucket)| LegendSwatch {
            x: i as f64 * (config.legend_swatch_width + config.legend_spacing),
            width: config.legend_swatch_width,
            height: config.legend_swatch_height,
            color: bucket.color(),
            label: bucket.label(),
        })
        .collect()
}
