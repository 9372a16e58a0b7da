//! Range Checking for Passenger Records

use crate::error::DataError;
use crate::record::RawPassenger;
use serde::{Deserialize, Serialize};

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Age valid range (years)
    pub age_range: (f64, f64),
    /// Fare valid range (pounds)
    pub fare_range: (f64, f64),
    /// Valid range for sibling/spouse and parent/child counts
    pub relatives_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_range: (0.0, 120.0),
            fare_range: (0.0, 1000.0),
            relatives_range: (0.0, 20.0),
        }
    }
}

/// Range validator for raw passenger records
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range. NaN and infinities are rejected.
    pub fn validate_range(
        &self,
        row: usize,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), DataError> {
        if !value.is_finite() || value < range.0 || value > range.1 {
            Err(DataError::OutOfRange {
                row,
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate every numeric field of a record. `row` is the 1-based record number.
    pub fn validate(&self, row: usize, record: &RawPassenger) -> Result<(), DataError> {
        if let Some(age) = record.age {
            self.validate_range(row, "Age", age, self.config.age_range)?;
        }
        if let Some(fare) = record.fare {
            self.validate_range(row, "Fare", fare, self.config.fare_range)?;
        }
        self.validate_range(row, "SibSp", record.sib_sp as f64, self.config.relatives_range)?;
        self.validate_range(row, "Parch", record.parch as f64, self.config.relatives_range)?;
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PassengerClass, Sex};

    fn record(age: Option<f64>, fare: Option<f64>) -> RawPassenger {
        RawPassenger {
            name: "Test, Mr. Example".to_string(),
            sex: Sex::Male,
            age,
            pclass: PassengerClass::Third,
            sib_sp: 0,
            parch: 0,
            fare,
            cabin: None,
            embarked: None,
            survived: false,
        }
    }

    #[test]
    fn test_valid_record() {
        let validator = Validator::default();
        assert!(validator.validate(1, &record(Some(22.0), Some(7.25))).is_ok());
        assert!(validator.validate(1, &record(None, None)).is_ok());
        assert!(validator.validate(1, &record(Some(0.42), Some(0.0))).is_ok());
    }

    #[test]
    fn test_negative_fare_rejected() {
        let validator = Validator::default();
        let err = validator.validate(7, &record(Some(30.0), Some(-1.0))).unwrap_err();
        match err {
            DataError::OutOfRange { row, field, .. } => {
                assert_eq!(row, 7);
                assert_eq!(field, "Fare");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_age_rejected() {
        let validator = Validator::default();
        assert!(validator.validate(1, &record(Some(f64::NAN), None)).is_err());
        assert!(validator.validate(1, &record(Some(f64::INFINITY), None)).is_err());
        assert!(validator.validate(1, &record(Some(150.0), None)).is_err());
    }

    #[test]
    fn test_relatives_range() {
        let validator = Validator::default();
        let mut r = record(Some(40.0), Some(30.0));
        r.sib_sp = 8;
        r.parch = 2;
        assert!(validator.validate(1, &r).is_ok());
        r.parch = 50;
        assert!(validator.validate(1, &r).is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_in_range_ages_pass(age in 0.0f64..=120.0, fare in 0.0f64..=1000.0) {
            let validator = Validator::default();
            proptest::prop_assert!(validator.validate(1, &record(Some(age), Some(fare))).is_ok());
        }

        #[test]
        fn prop_negative_ages_fail(age in -1000.0f64..-0.001) {
            let validator = Validator::default();
            proptest::prop_assert!(validator.validate(1, &record(Some(age), None)).is_err());
        }
    }
}
