/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Fixed chart geometry.
///
/// Defaults reproduce the original layout: a 1200x700 surface with
/// margins {top: 50, right: 50, bottom: 150, left: 100}, leaving a
/// 1050x500 plot area. The wide bottom margin holds the x-axis
/// caption and the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Total SVG width including margins.
    pub width: f64,
    /// Total SVG height including margins.
    pub height: f64,
    pub margins: Margins,
    /// Legend swatch width.
    pub legend_swatch_width: f64,
    /// Legend swatch height.
    pub legend_swatch_height: f64,
    /// Horizontal gap between legend swatches.
    pub legend_spacing: f64,
    /// Vertical offset of the legend below the plot area.
    pub legend_offset: f64,
    /// Tooltip offset from the pointer, to keep it out from under the
    /// cursor.
    pub tooltip_offset: (f64, f64),
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 1200.0,
            height: 700.0,
            margins: Margins {
                top: 50.0,
                right: 50.0,
                bottom: 150.0,
                left: 100.0,
            },
            legend_swatch_width: 60.0,
            legend_swatch_height: 20.0,
            legend_spacing: 40.0,
            legend_offset: 50.0,
            tooltip_offset: (5.0, -28.0),
            title: "Monthly Global Land-Surface Temperature".to_string(),
        }
    }
}

impl ChartConfig {
    /// Width of the plot area (inside the margins).
    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height of the plot area (inside the margins).
    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Subtitle line derived from the dataset, e.g.
    /// "1753 - 2015: Base temperature 8.66℃".
    pub fn subtitle(&self, first_year: i32, last_year: i32, base_temperature: f64) -> String {
        format!(
            "{} - {}: Base temperature {}℃",
            first_year, last_year, base_temperature
        )
    }
}
