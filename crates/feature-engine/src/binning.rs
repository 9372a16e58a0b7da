//! Age and Fare Binning

use crate::statistics::quantile;
use serde::Serialize;

/// Right-closed age bin edges: (0,12], (12,18], (18,35], (35,50], (50,100]
pub const AGE_BIN_EDGES: [f64; 6] = [0.0, 12.0, 18.0, 35.0, 50.0, 100.0];

/// Fixed age ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AgeGroup {
    #[serde(rename = "Child (0-12)")]
    Child,
    #[serde(rename = "Teen (13-18)")]
    Teen,
    #[serde(rename = "Adult (19-35)")]
    Adult,
    #[serde(rename = "Middle Age (36-50)")]
    MiddleAge,
    #[serde(rename = "Senior (50+)")]
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::MiddleAge,
        AgeGroup::Senior,
    ];

    /// Bin an age. Values on an edge fall into the lower bin; age 0 counts
    /// as a child and anything above the last edge as a senior.
    pub fn from_age(age: f64) -> Self {
        for (group, upper) in Self::ALL.iter().zip(&AGE_BIN_EDGES[1..]) {
            if age <= *upper {
                return *group;
            }
        }
        AgeGroup::Senior
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Child => "Child (0-12)",
            AgeGroup::Teen => "Teen (13-18)",
            AgeGroup::Adult => "Adult (19-35)",
            AgeGroup::MiddleAge => "Middle Age (36-50)",
            AgeGroup::Senior => "Senior (50+)",
        }
    }
}

/// Quartile-based fare categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FareGroup {
    Low,
    #[serde(rename = "Medium-Low")]
    MediumLow,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl FareGroup {
    pub const ALL: [FareGroup; 4] = [
        FareGroup::Low,
        FareGroup::MediumLow,
        FareGroup::MediumHigh,
        FareGroup::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FareGroup::Low => "Low",
            FareGroup::MediumLow => "Medium-Low",
            FareGroup::MediumHigh => "Medium-High",
            FareGroup::High => "High",
        }
    }
}

/// Quartile bin edges over the fare column.
///
/// Edges are min, Q1, Q2, Q3 and max with duplicates removed. Bins are
/// right-closed with the lowest edge included, and the k remaining bins take
/// the first k labels in order. A single distinct edge gives one `Low` bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareBins {
    edges: Vec<f64>,
}

impl FareBins {
    /// Compute bins from the filled fare column; `None` when it is empty
    pub fn from_fares(fares: &[f64]) -> Option<Self> {
        let mut edges: Vec<f64> = Vec::with_capacity(5);
        for q in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let edge = quantile(fares, q)?;
            if edges.last() != Some(&edge) {
                edges.push(edge);
            }
        }
        Some(Self { edges })
    }

    /// Distinct edges in ascending order
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of fare groups actually in use
    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1).max(1)
    }

    /// Groups in use, lowest first
    pub fn groups(&self) -> &'static [FareGroup] {
        &FareGroup::ALL[..self.bin_count()]
    }

    /// Assign a fare to its group
    pub fn assign(&self, fare: f64) -> FareGroup {
        let upper_edges = self.edges.get(1..).unwrap_or_default();
        let idx = upper_edges
            .iter()
            .position(|upper| fare <= *upper)
            .unwrap_or(self.bin_count() - 1);
        FareGroup::ALL[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(0.42), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12.0), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12.0001), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(18.0), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(18.5), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(35.0), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(50.0), AgeGroup::MiddleAge);
        assert_eq!(AgeGroup::from_age(50.5), AgeGroup::Senior);
        assert_eq!(AgeGroup::from_age(100.0), AgeGroup::Senior);
    }

    #[test]
    fn test_age_group_outside_edges() {
        assert_eq!(AgeGroup::from_age(0.0), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(110.0), AgeGroup::Senior);
    }

    #[test]
    fn test_fare_quartiles() {
        let fares = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let bins = FareBins::from_fares(&fares).unwrap();
        assert_eq!(bins.edges(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(bins.bin_count(), 4);
        assert_eq!(bins.assign(1.0), FareGroup::Low);
        assert_eq!(bins.assign(3.0), FareGroup::Low);
        assert_eq!(bins.assign(3.5), FareGroup::MediumLow);
        assert_eq!(bins.assign(6.0), FareGroup::MediumHigh);
        assert_eq!(bins.assign(9.0), FareGroup::High);
    }

    #[test]
    fn test_identical_fares_collapse_to_one_group() {
        let bins = FareBins::from_fares(&[8.05; 10]).unwrap();
        assert_eq!(bins.edges(), &[8.05]);
        assert_eq!(bins.groups(), &[FareGroup::Low]);
        assert_eq!(bins.assign(8.05), FareGroup::Low);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        // Half the fares are zero: min, Q1 and Q2 coincide
        let fares = [0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 20.0, 30.0, 40.0];
        let bins = FareBins::from_fares(&fares).unwrap();
        assert_eq!(bins.edges(), &[0.0, 20.0, 40.0]);
        assert_eq!(bins.groups(), &[FareGroup::Low, FareGroup::MediumLow]);
        assert_eq!(bins.assign(0.0), FareGroup::Low);
        assert_eq!(bins.assign(20.0), FareGroup::Low);
        assert_eq!(bins.assign(30.0), FareGroup::MediumLow);
    }

    #[test]
    fn test_empty_fares() {
        assert!(FareBins::from_fares(&[]).is_none());
    }
}
