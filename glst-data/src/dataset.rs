use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

/// A single monthly temperature record.
///
/// `variance` is the signed deviation (°C) from the dataset's base
/// temperature for the given year/month. Months are 1-based
/// (1 = January), matching the upstream JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

impl MonthlyVariance {
    /// Absolute temperature for this record given the dataset's base
    /// temperature. Derived on demand, never stored.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    /// A record is usable when the month is a calendar month and the
    /// variance is a finite number.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && self.variance.is_finite()
    }
}

/// The full temperature dataset: a base temperature and one variance
/// record per (year, month) pair. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Dataset> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset from a local JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Dataset> {
        let body = std::fs::read_to_string(path)?;
        Dataset::from_json_str(&body)
    }

    /// First and last record year, or None for an empty dataset.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.monthly_variance.iter().map(|r| r.year).min()?;
        let last = self.monthly_variance.iter().map(|r| r.year).max()?;
        Some((first, last))
    }

    /// Drop malformed records (month outside 1..=12, non-finite
    /// variance), warning for each one dropped. Returns the cleaned
    /// dataset and how many records were skipped.
    ///
    /// Uniqueness of (year, month) is assumed upstream and not
    /// enforced here.
    pub fn sanitized(self) -> Result<(Dataset, usize)> {
        let total = self.monthly_variance.len();
        let kept: Vec<MonthlyVariance> = self
            .monthly_variance
            .into_iter()
            .filter(|r| {
                if r.is_valid() {
                    true
                } else {
                    warn!(
                        "Skipping malformed record: year={} month={} variance={}",
                        r.year, r.month, r.variance
                    );
                    false
                }
            })
            .collect();
        let skipped = total - kept.len();
        if kept.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok((
            Dataset {
                base_temperature: self.base_temperature,
                monthly_variance: kept,
            },
            skipped,
        ))
    }
}
