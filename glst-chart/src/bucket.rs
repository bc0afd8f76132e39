//! Temperature bucket classification.
//!
//! Five ordered buckets partition the whole temperature axis; every
//! finite temperature lands in exactly one. A temperature sitting
//! exactly on a threshold (6, 9, 12, 15) belongs to the bucket above
//! it, so 9.00°C classifies as 9-12, not 6-9.

/// Bucket thresholds in °C, in ascending order.
const THRESHOLDS: [f64; 4] = [6.0, 9.0, 12.0, 15.0];

/// One of the five temperature ranges used for cell coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TempBucket {
    /// Below 6°C
    Coldest,
    /// 6 to 9°C
    Cold,
    /// 9 to 12°C
    Mild,
    /// 12 to 15°C
    Warm,
    /// 15°C and above
    Hottest,
}

impl TempBucket {
    pub const ALL: [TempBucket; 5] = [
        TempBucket::Coldest,
        TempBucket::Cold,
        TempBucket::Mild,
        TempBucket::Warm,
        TempBucket::Hottest,
    ];

    /// Classify an absolute temperature into its bucket.
    pub fn classify(temperature: f64) -> TempBucket {
        let index = THRESHOLDS.iter().filter(|&&t| temperature >= t).count();
        Self::ALL[index]
    }

    /// Zero-based position in bucket order, coldest first.
    pub fn index(&self) -> usize {
        match self {
            TempBucket::Coldest => 0,
            TempBucket::Cold => 1,
            TempBucket::Mild => 2,
            TempBucket::Warm => 3,
            TempBucket::Hottest => 4,
        }
    }

    /// SVG fill color for cells and legend swatches in this bucket.
    pub fn color(&self) -> &'static str {
        match self {
            TempBucket::Coldest => "steelblue",
            TempBucket::Cold => "skyblue",
            TempBucket::Mild => "lightgreen",
            TempBucket::Warm => "orange",
            TempBucket::Hottest => "lightcoral",
        }
    }

    /// Human-readable range text for the legend.
    pub fn label(&self) -> &'static str {
        match self {
            TempBucket::Coldest => "< 6°C",
            TempBucket::Cold => "6 - 9°C",
            TempBucket::Mild => "9 - 12°C",
            TempBucket::Warm => "12 - 15°C",
            TempBucket::Hottest => "> 15°C",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_total_over_extremes() {
        assert_eq!(TempBucket::classify(f64::NEG_INFINITY), TempBucket::Coldest);
        assert_eq!(TempBucket::classify(-40.0), TempBucket::Coldest);
        assert_eq!(TempBucket::classify(100.0), TempBucket::Hottest);
        assert_eq!(TempBucket::classify(f64::INFINITY), TempBucket::Hottest);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut temp = -10.0;
        let mut last = TempBucket::classify(temp);
        while temp < 25.0 {
            temp += 0.01;
            let next = TempBucket::classify(temp);
            assert!(next.index() >= last.index(), "bucket decreased at {}", temp);
            last = next;
        }
    }

    #[test]
    fn test_boundaries_map_to_upper_bucket() {
        assert_eq!(TempBucket::classify(6.0), TempBucket::Cold);
        assert_eq!(TempBucket::classify(9.0), TempBucket::Mild);
        assert_eq!(TempBucket::classify(12.0), TempBucket::Warm);
        assert_eq!(TempBucket::classify(15.0), TempBucket::Hottest);
    }

    #[test]
    fn test_just_below_boundary_stays_in_lower_bucket() {
        assert_eq!(TempBucket::classify(5.999), TempBucket::Coldest);
        assert_eq!(TempBucket::classify(8.999), TempBucket::Cold);
        assert_eq!(TempBucket::classify(11.999), TempBucket::Mild);
        assert_eq!(TempBucket::classify(14.999), TempBucket::Warm);
    }

    #[test]
    fn test_classify_round_trip_cold_record() {
        // base 8.66 + variance -3.5 = 5.16 -> coldest bucket, steelblue
        let bucket = TempBucket::classify(8.66 + (-3.5));
        assert_eq!(bucket, TempBucket::Coldest);
        assert_eq!(bucket.color(), "steelblue");
        assert_eq!(bucket.label(), "< 6°C");
    }

    #[test]
    fn test_bucket_order_matches_index() {
        for (i, bucket) in TempBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
    }
}
