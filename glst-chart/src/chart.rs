//! Chart assembly: dataset + config in, laid-out chart out.

use glst_data::Dataset;
use log::info;
use thiserror::Error;

use crate::axis::{x_axis_ticks, y_axis_ticks, Tick};
use crate::cell::{layout_cells, Cell};
use crate::config::ChartConfig;
use crate::interaction::HoverController;
use crate::legend::{layout_legend, LegendSwatch};
use crate::scale::{BandScale, TimeScale};
use crate::svg::render_svg;

#[derive(Error, Debug)]
pub enum ChartError {
    /// No usable record survived validation
    #[error("Dataset contains no plottable records")]
    EmptyDataset,

    /// All records fall in a single year, so no time axis exists
    #[error("Dataset year span is degenerate ({0})")]
    DegenerateSpan(i32),
}

/// A fully laid-out chart: scales plus cell, axis and legend
/// descriptors. Built once per dataset; rendering and hover handling
/// read from it without mutating it.
#[derive(Debug)]
pub struct Chart {
    config: ChartConfig,
    subtitle: String,
    cells: Vec<Cell>,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
    legend: Vec<LegendSwatch>,
}

/// Build a chart from a dataset.
///
/// Malformed records are skipped (with a warning) during cell layout;
/// the year span and scales are derived from the records that remain.
pub fn build_chart(dataset: &Dataset, config: ChartConfig) -> Result<Chart, ChartError> {
    let valid: Vec<_> = dataset
        .monthly_variance
        .iter()
        .filter(|r| r.is_valid())
        .collect();
    if valid.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let first_year = valid.iter().map(|r| r.year).min().unwrap_or(0);
    let last_year = valid.iter().map(|r| r.year).max().unwrap_or(0);
    let time_scale = TimeScale::new(first_year, last_year, config.plot_width())
        .ok_or(ChartError::DegenerateSpan(first_year))?;
    let band_scale = BandScale::new(config.plot_height());

    let cells = layout_cells(dataset, &time_scale, &band_scale, config.plot_width());
    let x_ticks = x_axis_ticks(&time_scale);
    let y_ticks = y_axis_ticks(&band_scale);
    let legend = layout_legend(&config);
    let subtitle = config.subtitle(first_year, last_year, dataset.base_temperature);

    info!(
        "Chart laid out: {} cells, {} x ticks, years {}-{}",
        cells.len(),
        x_ticks.len(),
        first_year,
        last_year
    );

    Ok(Chart {
        config,
        subtitle,
        cells,
        x_ticks,
        y_ticks,
        legend,
    })
}

impl Chart {
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn x_ticks(&self) -> &[Tick] {
        &self.x_ticks
    }

    pub fn y_ticks(&self) -> &[Tick] {
        &self.y_ticks
    }

    pub fn legend(&self) -> &[LegendSwatch] {
        &self.legend
    }

    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        render_svg(self)
    }

    /// Hover controller over this chart's cells.
    pub fn hover(&self) -> HoverController<'_> {
        HoverController::new(&self.cells, self.config.tooltip_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glst_data::MonthlyVariance;

    fn record(year: i32, month: u32, variance: f64) -> MonthlyVariance {
        MonthlyVariance {
            year,
            month,
            variance,
        }
    }

    fn synthetic_dataset() -> Dataset {
        let mut monthly_variance = Vec::new();
        for year in 2000..=2002 {
            for month in 1..=12 {
                monthly_variance.push(record(year, month, 0.1 * month as f64));
            }
        }
        Dataset {
            base_temperature: 8.66,
            monthly_variance,
        }
    }

    #[test]
    fn test_build_chart_full_pipeline() {
        let chart = build_chart(&synthetic_dataset(), ChartConfig::default()).unwrap();
        assert_eq!(chart.cells().len(), 36);
        assert_eq!(chart.y_ticks().len(), 12);
        assert_eq!(chart.legend().len(), 5);
        assert_eq!(chart.subtitle(), "2000 - 2002: Base temperature 8.66℃");
    }

    #[test]
    fn test_build_chart_empty_dataset_fails() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![],
        };
        assert!(matches!(
            build_chart(&dataset, ChartConfig::default()),
            Err(ChartError::EmptyDataset)
        ));
    }

    #[test]
    fn test_build_chart_all_invalid_records_fails() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![record(2000, 0, 0.1), record(2000, 13, f64::NAN)],
        };
        assert!(matches!(
            build_chart(&dataset, ChartConfig::default()),
            Err(ChartError::EmptyDataset)
        ));
    }

    #[test]
    fn test_build_chart_single_year_fails() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![record(2000, 1, 0.1), record(2000, 2, 0.2)],
        };
        assert!(matches!(
            build_chart(&dataset, ChartConfig::default()),
            Err(ChartError::DegenerateSpan(2000))
        ));
    }

    #[test]
    fn test_span_ignores_invalid_records() {
        let mut dataset = synthetic_dataset();
        // An invalid record far outside the span must not widen it.
        dataset.monthly_variance.push(record(1800, 0, 0.5));
        let chart = build_chart(&dataset, ChartConfig::default()).unwrap();
        assert_eq!(chart.subtitle(), "2000 - 2002: Base temperature 8.66℃");
        assert_eq!(chart.cells().len(), 36);
    }

    #[test]
    fn test_hover_reads_chart_cells() {
        let chart = build_chart(&synthetic_dataset(), ChartConfig::default()).unwrap();
        let mut hover = chart.hover();
        hover.pointer_enter(0, (10.0, 10.0));
        assert!(hover.tooltip().visible);
        assert!(hover.tooltip().content.contains("Year: 2000"));
        hover.pointer_leave();
        assert!(!hover.tooltip().visible);
    }
}
