//! CSV Loader for the Passenger Manifest

use crate::error::DataError;
use crate::record::RawPassenger;
use crate::validator::Validator;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Name", "Sex", "Age", "Pclass", "SibSp", "Parch", "Fare", "Cabin", "Embarked", "Survived",
];

/// Loads and validates the passenger table
pub struct DatasetLoader {
    validator: Validator,
}

impl DatasetLoader {
    /// Create a loader with a custom validator
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// Load records from a CSV file
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RawPassenger>, DataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records = self.load_reader(file)?;
        info!("Loaded {} passenger records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Load records from any CSV source
    pub fn load_reader<R: Read>(&self, source: R) -> Result<Vec<RawPassenger>, DataError> {
        let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(source);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::MissingColumn(column));
            }
        }
        debug!("Header columns: {:?}", headers);

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<RawPassenger>().enumerate() {
            let record = result?;
            self.validator.validate(idx + 1, &record)?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(DataError::Empty);
        }

        Ok(records)
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(Validator::default())
    }
}
