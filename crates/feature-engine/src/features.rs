//! Enriched Passenger Table

use crate::binning::{AgeGroup, FareBins, FareGroup};
use crate::statistics::{median, ColumnStats};
use crate::FeatureError;
use passenger_data::{PassengerClass, Port, RawPassenger, Sex};
use serde::Serialize;
use tracing::{debug, info};

/// One passenger after null filling and feature derivation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passenger {
    pub name: String,
    pub sex: Sex,
    /// 0 = female, 1 = male
    pub sex_code: u8,
    pub age: f64,
    pub pclass: PassengerClass,
    pub sib_sp: u32,
    pub parch: u32,
    pub fare: f64,
    pub cabin: Option<String>,
    pub embarked: Port,
    pub survived: bool,
    /// sib_sp + parch + 1
    pub family_size: u32,
    pub age_group: AgeGroup,
    pub fare_group: FareGroup,
    /// Age was missing and filled with the median
    pub age_imputed: bool,
    pub fare_imputed: bool,
    pub embarked_imputed: bool,
}

/// Dataset-wide survival figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub survived: usize,
    /// Percentage of passengers who survived
    pub survival_rate: f64,
}

impl DatasetSummary {
    fn compute(passengers: &[Passenger]) -> Self {
        let total = passengers.len();
        let survived = passengers.iter().filter(|p| p.survived).count();
        let survival_rate = if total > 0 {
            survived as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total,
            survived,
            survival_rate,
        }
    }

    pub fn did_not_survive(&self) -> usize {
        self.total - self.survived
    }

    pub fn non_survival_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 - self.survival_rate
        }
    }
}

/// What derivation filled in and how the fare bins came out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivationReport {
    pub median_age: f64,
    pub median_fare: f64,
    pub ages_filled: usize,
    pub fares_filled: usize,
    pub ports_filled: usize,
    pub fare_bins: FareBins,
    pub fare_groups: Vec<FareGroup>,
    pub age_stats: ColumnStats,
    pub fare_stats: ColumnStats,
}

/// The enriched table with its summary. Only [`FeatureDeriver`] builds one,
/// and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    passengers: Vec<Passenger>,
    summary: DatasetSummary,
    report: DerivationReport,
}

impl Dataset {
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn report(&self) -> &DerivationReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

/// Derives the enriched table from raw manifest rows
#[derive(Debug, Clone)]
pub struct FeatureDeriver {
    /// Port used when embarkation is missing
    default_port: Port,
}

impl FeatureDeriver {
    /// Create a deriver with a custom fill port
    pub fn new(default_port: Port) -> Self {
        Self { default_port }
    }

    /// Fill missing values, derive features, and summarize
    pub fn derive(&self, raw: Vec<RawPassenger>) -> Result<Dataset, FeatureError> {
        if raw.is_empty() {
            return Err(FeatureError::EmptyDataset);
        }

        let observed_ages: Vec<f64> = raw.iter().filter_map(|r| r.age).collect();
        let median_age = median(&observed_ages).ok_or(FeatureError::NoObservedValues("Age"))?;

        let observed_fares: Vec<f64> = raw.iter().filter_map(|r| r.fare).collect();
        let median_fare = median(&observed_fares).ok_or(FeatureError::NoObservedValues("Fare"))?;

        let filled_fares: Vec<f64> = raw.iter().map(|r| r.fare.unwrap_or(median_fare)).collect();
        let fare_bins = FareBins::from_fares(&filled_fares).ok_or(FeatureError::EmptyDataset)?;
        debug!("Fare quartile edges: {:?}", fare_bins.edges());

        let passengers: Vec<Passenger> = raw
            .into_iter()
            .map(|r| {
                let age = r.age.unwrap_or(median_age);
                let fare = r.fare.unwrap_or(median_fare);
                Passenger {
                    sex_code: r.sex.code(),
                    age,
                    fare,
                    embarked: r.embarked.unwrap_or(self.default_port),
                    family_size: r.sib_sp + r.parch + 1,
                    age_group: AgeGroup::from_age(age),
                    fare_group: fare_bins.assign(fare),
                    age_imputed: r.age.is_none(),
                    fare_imputed: r.fare.is_none(),
                    embarked_imputed: r.embarked.is_none(),
                    name: r.name,
                    sex: r.sex,
                    pclass: r.pclass,
                    sib_sp: r.sib_sp,
                    parch: r.parch,
                    cabin: r.cabin,
                    survived: r.survived,
                }
            })
            .collect();

        let summary = DatasetSummary::compute(&passengers);

        let ages: Vec<f64> = passengers.iter().map(|p| p.age).collect();
        let report = DerivationReport {
            median_age,
            median_fare,
            ages_filled: passengers.iter().filter(|p| p.age_imputed).count(),
            fares_filled: passengers.iter().filter(|p| p.fare_imputed).count(),
            ports_filled: passengers.iter().filter(|p| p.embarked_imputed).count(),
            fare_groups: fare_bins.groups().to_vec(),
            fare_bins,
            age_stats: ColumnStats::compute(&ages),
            fare_stats: ColumnStats::compute(&filled_fares),
        };

        info!(
            "Derived features for {} passengers: {} survived ({:.1}%), filled {} ages, {} fares, {} ports",
            summary.total,
            summary.survived,
            summary.survival_rate,
            report.ages_filled,
            report.fares_filled,
            report.ports_filled
        );

        Ok(Dataset {
            passengers,
            summary,
            report,
        })
    }
}

impl Default for FeatureDeriver {
    fn default() -> Self {
        Self::new(Port::Southampton)
    }
}
