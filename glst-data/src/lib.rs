pub mod dataset;
pub mod error;

#[cfg(feature = "api")]
pub mod client;

pub use dataset::{Dataset, MonthlyVariance};
pub use error::{DatasetError, Result};
