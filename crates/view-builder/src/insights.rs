//! Survival Breakdowns for the Findings Section

use crate::aggregate::{group_rate, GroupRate};
use feature_engine::{AgeGroup, Dataset, FareGroup, Passenger};
use passenger_data::Port;
use serde::Serialize;

/// Family size buckets used in the findings text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyBucket {
    Alone,
    Small,
    Large,
}

impl FamilyBucket {
    pub const ALL: [FamilyBucket; 3] = [FamilyBucket::Alone, FamilyBucket::Small, FamilyBucket::Large];

    pub fn from_family_size(family_size: u32) -> Self {
        match family_size {
            0 | 1 => FamilyBucket::Alone,
            2..=4 => FamilyBucket::Small,
            _ => FamilyBucket::Large,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FamilyBucket::Alone => "Traveling alone",
            FamilyBucket::Small => "Families of 2-4",
            FamilyBucket::Large => "Families of 5+",
        }
    }
}

/// Survival rates broken down by derived features. Empty groups are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsSpec {
    pub by_age_group: Vec<GroupRate>,
    pub by_fare_group: Vec<GroupRate>,
    pub by_family_size: Vec<GroupRate>,
    pub by_embarkation: Vec<GroupRate>,
}

fn breakdown<K, F>(passengers: &[Passenger], keys: &[K], label: impl Fn(K) -> &'static str, key_of: F) -> Vec<GroupRate>
where
    K: Copy + PartialEq,
    F: Fn(&Passenger) -> K,
{
    keys.iter()
        .filter_map(|key| group_rate(label(*key), passengers.iter().filter(|p| key_of(p) == *key)))
        .collect()
}

/// Build survival breakdowns by age group, fare group, family size and port
pub fn build_insights(dataset: &Dataset) -> InsightsSpec {
    let passengers = dataset.passengers();
    InsightsSpec {
        by_age_group: breakdown(passengers, &AgeGroup::ALL, AgeGroup::label, |p| p.age_group),
        by_fare_group: breakdown(passengers, &FareGroup::ALL, FareGroup::label, |p| p.fare_group),
        by_family_size: breakdown(passengers, &FamilyBucket::ALL, FamilyBucket::label, |p| {
            FamilyBucket::from_family_size(p.family_size)
        }),
        by_embarkation: breakdown(passengers, &Port::ALL, Port::name, |p| p.embarked),
    }
}
