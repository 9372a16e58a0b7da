//! Raw Passenger Records

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Passenger sex as recorded in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Both categories in display order
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Numeric encoding: 0 = female, 1 = male
    pub fn code(self) -> u8 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }

    /// Capitalized label for chart categories
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// Ticket class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PassengerClass {
    First,
    Second,
    Third,
}

impl PassengerClass {
    /// All classes in ascending order
    pub const ALL: [PassengerClass; 3] = [
        PassengerClass::First,
        PassengerClass::Second,
        PassengerClass::Third,
    ];

    /// Class number (1, 2 or 3)
    pub fn number(self) -> u8 {
        match self {
            PassengerClass::First => 1,
            PassengerClass::Second => 2,
            PassengerClass::Third => 3,
        }
    }

    /// Label such as "1st Class"
    pub fn label(self) -> &'static str {
        match self {
            PassengerClass::First => "1st Class",
            PassengerClass::Second => "2nd Class",
            PassengerClass::Third => "3rd Class",
        }
    }
}

impl TryFrom<u8> for PassengerClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PassengerClass::First),
            2 => Ok(PassengerClass::Second),
            3 => Ok(PassengerClass::Third),
            other => Err(format!("passenger class must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<PassengerClass> for u8 {
    fn from(class: PassengerClass) -> Self {
        class.number()
    }
}

/// Port of embarkation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Port {
    #[serde(rename = "C")]
    Cherbourg,
    #[serde(rename = "Q")]
    Queenstown,
    #[serde(rename = "S")]
    Southampton,
}

impl Port {
    pub const ALL: [Port; 3] = [Port::Cherbourg, Port::Queenstown, Port::Southampton];

    /// Single-letter manifest code
    pub fn code(self) -> &'static str {
        match self {
            Port::Cherbourg => "C",
            Port::Queenstown => "Q",
            Port::Southampton => "S",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Port::Cherbourg => "Cherbourg",
            Port::Queenstown => "Queenstown",
            Port::Southampton => "Southampton",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of the manifest before any filling or derivation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPassenger {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    #[serde(rename = "Pclass")]
    pub pclass: PassengerClass,
    /// Siblings and spouses aboard
    #[serde(rename = "SibSp")]
    pub sib_sp: u32,
    /// Parents and children aboard
    #[serde(rename = "Parch")]
    pub parch: u32,
    #[serde(rename = "Fare")]
    pub fare: Option<f64>,
    #[serde(rename = "Cabin")]
    pub cabin: Option<String>,
    #[serde(rename = "Embarked")]
    pub embarked: Option<Port>,
    #[serde(rename = "Survived", deserialize_with = "survived_flag")]
    pub survived: bool,
}

fn survived_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "survived must be 0 or 1, got {}",
            other
        ))),
    }
}
