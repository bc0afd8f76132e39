//! Heatmap layout and rendering for monthly temperature data.
//!
//! The pipeline is descriptor-first: scales and pure layout structs
//! (cells, axis ticks, legend swatches) are computed from the dataset,
//! then a separate SVG step serializes them. Hover behavior lives in
//! its own state machine so it can be driven and tested without a
//! rendering surface.

pub mod axis;
pub mod bucket;
pub mod cell;
pub mod chart;
pub mod config;
pub mod interaction;
pub mod legend;
pub mod scale;
pub mod svg;

pub use bucket::TempBucket;
pub use cell::Cell;
pub use chart::{build_chart, Chart, ChartError};
pub use config::ChartConfig;
pub use interaction::{HoverController, TooltipState};
