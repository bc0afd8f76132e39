//! Scale mappings from data space to pixel space.

use chrono::NaiveDate;

/// Number of month bands on the y axis.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Continuous linear mapping from calendar dates to horizontal pixels.
///
/// The domain runs from January 1 of the first year to January 1 of
/// the last year; interpolation is by day count, so any date in range
/// maps to a pixel even though cells only ever query year starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain_start: NaiveDate,
    domain_end: NaiveDate,
    range_end: f64,
}

impl TimeScale {
    /// Build the scale for `[Jan 1 first_year, Jan 1 last_year]` onto
    /// `[0, plot_width]`. Returns None for a degenerate year span or a
    /// year chrono cannot represent.
    pub fn new(first_year: i32, last_year: i32, plot_width: f64) -> Option<TimeScale> {
        if last_year <= first_year {
            return None;
        }
        Some(TimeScale {
            domain_start: NaiveDate::from_ymd_opt(first_year, 1, 1)?,
            domain_end: NaiveDate::from_ymd_opt(last_year, 1, 1)?,
            range_end: plot_width,
        })
    }

    /// Map a date to its horizontal pixel position.
    pub fn scale(&self, date: NaiveDate) -> f64 {
        let total = (self.domain_end - self.domain_start).num_days() as f64;
        let offset = (date - self.domain_start).num_days() as f64;
        offset / total * self.range_end
    }

    /// Pixel position of January 1 of the given year.
    pub fn scale_year(&self, year: i32) -> f64 {
        match NaiveDate::from_ymd_opt(year, 1, 1) {
            Some(date) => self.scale(date),
            None => 0.0,
        }
    }

    pub fn first_year(&self) -> i32 {
        use chrono::Datelike;
        self.domain_start.year()
    }

    pub fn last_year(&self) -> i32 {
        use chrono::Datelike;
        self.domain_end.year()
    }
}

/// Discrete band scale partitioning the vertical plot extent into 12
/// equal contiguous month bands, January on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    range_end: f64,
}

impl BandScale {
    pub fn new(plot_height: f64) -> BandScale {
        BandScale {
            range_end: plot_height,
        }
    }

    /// Top edge of the band for a 1-based month. Out-of-range months
    /// are the caller's bug; records are validated before layout.
    pub fn band(&self, month: u32) -> f64 {
        (month - 1) as f64 * self.bandwidth()
    }

    /// Height of each band.
    pub fn bandwidth(&self) -> f64 {
        self.range_end / MONTHS_PER_YEAR as f64
    }
}

/// Full English month name for a 1-based month index.
pub fn month_name(month: u32) -> String {
    match NaiveDate::from_ymd_opt(2000, month, 1) {
        Some(date) => date.format("%B").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_scale_endpoints() {
        let scale = TimeScale::new(1753, 2015, 1050.0).unwrap();
        assert_eq!(scale.scale_year(1753), 0.0);
        assert_eq!(scale.scale_year(2015), 1050.0);
    }

    #[test]
    fn test_time_scale_interpolates_mid_domain() {
        let scale = TimeScale::new(2000, 2010, 100.0).unwrap();
        let mid = scale.scale_year(2005);
        // 2004 is a leap year so the midpoint is not exactly 50, but
        // it must stay within a day's width of it.
        assert!((mid - 50.0).abs() < 0.1, "midpoint was {}", mid);
        let jul = scale.scale(NaiveDate::from_ymd_opt(2000, 7, 1).unwrap());
        assert!(jul > 0.0 && jul < scale.scale_year(2001));
    }

    #[test]
    fn test_time_scale_is_monotonic_over_years() {
        let scale = TimeScale::new(1753, 2015, 1050.0).unwrap();
        let mut last = f64::NEG_INFINITY;
        for year in 1753..=2015 {
            let x = scale.scale_year(year);
            assert!(x > last);
            last = x;
        }
    }

    #[test]
    fn test_time_scale_rejects_degenerate_span() {
        assert!(TimeScale::new(2000, 2000, 100.0).is_none());
        assert!(TimeScale::new(2010, 2000, 100.0).is_none());
    }

    #[test]
    fn test_band_scale_tiles_plot_height() {
        let scale = BandScale::new(500.0);
        assert_eq!(scale.bandwidth(), 500.0 / 12.0);
        // Bands are contiguous: each band starts where the previous
        // one ends, and the last band ends at the plot height.
        for month in 1..=12u32 {
            let top = scale.band(month);
            assert!((top - (month - 1) as f64 * scale.bandwidth()).abs() < 1e-9);
        }
        let bottom = scale.band(12) + scale.bandwidth();
        assert!((bottom - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_scale_january_is_top_band() {
        let scale = BandScale::new(500.0);
        assert_eq!(scale.band(1), 0.0);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
    }
}
