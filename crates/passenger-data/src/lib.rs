//! Passenger Data Loading and Validation
//!
//! Reads the passenger manifest CSV into typed records and rejects
//! malformed or out-of-range input before any feature derivation runs.

mod error;
mod loader;
mod record;
mod validator;

pub use error::DataError;
pub use loader::{DatasetLoader, REQUIRED_COLUMNS};
pub use record::{PassengerClass, Port, RawPassenger, Sex};
pub use validator::{ValidationConfig, Validator};
