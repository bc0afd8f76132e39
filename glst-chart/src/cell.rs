//! Cell layout: one positioned, colored rectangle per monthly record.

use glst_data::Dataset;
use log::warn;
use serde::Serialize;

use crate::bucket::TempBucket;
use crate::scale::{BandScale, TimeScale};

/// Ephemeral visual projection of one monthly record.
///
/// Carries the record's identifying metadata (year, month, computed
/// temperature, variance) so rendered output and hover handling can
/// be verified without reaching back into the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip)]
    pub bucket: TempBucket,
    /// 1-based calendar month.
    pub month: u32,
    pub year: i32,
    /// Absolute temperature (base + variance) in °C.
    pub temperature: f64,
    pub variance: f64,
}

impl Cell {
    /// Zero-based month index, as exposed in the `data-month`
    /// attribute for external verification.
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    pub fn fill(&self) -> &'static str {
        self.bucket.color()
    }
}

/// Project every usable record in the dataset onto a cell.
///
/// Cell width is constant across the chart: the plot width divided by
/// the year span. Records with an out-of-range month or non-finite
/// variance are skipped with a warning; everything else produces
/// exactly one cell, so the cell count equals the valid record count.
pub fn layout_cells(
    dataset: &Dataset,
    time_scale: &TimeScale,
    band_scale: &BandScale,
    plot_width: f64,
) -> Vec<Cell> {
    let year_span = (time_scale.last_year() - time_scale.first_year()) as f64;
    let cell_width = plot_width / year_span;
    let cell_height = band_scale.bandwidth();

    let mut cells = Vec::with_capacity(dataset.monthly_variance.len());
    for record in &dataset.monthly_variance {
        if !record.is_valid() {
            warn!(
                "Skipping unplottable record: year={} month={}",
                record.year, record.month
            );
            continue;
        }
        let temperature = record.temperature(dataset.base_temperature);
        cells.push(Cell {
            x: time_scale.scale_year(record.year),
            y: band_scale.band(record.month),
            width: cell_width,
            height: cell_height,
            bucket: TempBucket::classify(temperature),
            month: record.month,
            year: record.year,
            temperature,
            variance: record.variance,
        });
    }
    cells
}
