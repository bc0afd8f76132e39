//! Axis tick layout.

use crate::scale::{month_name, BandScale, TimeScale, MONTHS_PER_YEAR};

/// A single tick: pixel position along its axis plus label text.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// X-axis ticks: one per decade year inside the time domain.
pub fn x_axis_ticks(time_scale: &TimeScale) -> Vec<Tick> {
    let first = time_scale.first_year();
    let last = time_scale.last_year();
    // First decade year at or after the domain start.
    let start = if first % 10 == 0 {
        first
    } else {
        first + (10 - first.rem_euclid(10))
    };

    let mut ticks = Vec::new();
    let mut year = start;
    while year <= last {
        ticks.push(Tick {
            position: time_scale.scale_year(year),
            label: year.to_string(),
        });
        year += 10;
    }
    ticks
}

/// Y-axis ticks: one per month band, centered in the band, labeled
/// with the full month name.
pub fn y_axis_ticks(band_scale: &BandScale) -> Vec<Tick> {
    (1..=MONTHS_PER_YEAR)
        .map(|month| Tick {
            position: band_scale.band(month) + band_scale.bandwidth() / 2.0,
            label: month_name(month),
        })
        .collect()
}
