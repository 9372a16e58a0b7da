//! Feature Engineering Engine
//!
//! Turns raw manifest rows into the enriched passenger table: median
//! imputation, family size, age and fare groups, and the dataset summary.

mod binning;
mod features;
mod statistics;

pub use binning::{AgeGroup, FareBins, FareGroup, AGE_BIN_EDGES};
pub use features::{Dataset, DatasetSummary, DerivationReport, FeatureDeriver, Passenger};
pub use statistics::{median, quantile, BoxSummary, ColumnStats};

use thiserror::Error;

/// Feature derivation errors
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Cannot derive features from an empty passenger table")]
    EmptyDataset,
    #[error("Column {0} has no observed values to impute from")]
    NoObservedValues(&'static str),
}
