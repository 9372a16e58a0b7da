//! Per-Passenger Scatter

use crate::chart::{
    Axis, LegendEntry, MarkerSymbol, PointDetails, ScatterPoint, ScatterSpec, SymbolLegendEntry,
};
use crate::palette;
use feature_engine::{Dataset, Passenger};
use passenger_data::Sex;

/// Marker diameter for the smallest family
pub const MIN_MARKER_SIZE: f64 = 6.0;
/// Marker diameter for the largest family
pub const MAX_MARKER_SIZE: f64 = 30.0;

fn symbol_for(sex: Sex) -> MarkerSymbol {
    match sex {
        Sex::Female => MarkerSymbol::Circle,
        Sex::Male => MarkerSymbol::Diamond,
    }
}

/// Build the age/fare scatter, one point per passenger in table order
pub fn build_scatter(dataset: &Dataset) -> ScatterSpec {
    let passengers = dataset.passengers();

    let smallest = passengers.iter().map(|p| p.family_size).min().unwrap_or(1);
    let largest = passengers.iter().map(|p| p.family_size).max().unwrap_or(1);
    let marker_size = |family_size: u32| {
        if largest > smallest {
            let t = (family_size - smallest) as f64 / (largest - smallest) as f64;
            MIN_MARKER_SIZE + t * (MAX_MARKER_SIZE - MIN_MARKER_SIZE)
        } else {
            (MIN_MARKER_SIZE + MAX_MARKER_SIZE) / 2.0
        }
    };

    let points = passengers
        .iter()
        .map(|p| ScatterPoint {
            x: p.age,
            y: p.fare,
            size: marker_size(p.family_size),
            color: palette::outcome_color(p.survived),
            symbol: symbol_for(p.sex),
            details: details(p),
        })
        .collect();

    ScatterSpec {
        title: "Interactive Passenger Analysis: Age vs Fare".to_string(),
        height: 600,
        x_axis: Axis::new("Age (years)", true),
        y_axis: Axis::new("Fare Paid (£)", true),
        points,
        color_legend: vec![
            LegendEntry {
                name: palette::DID_NOT_SURVIVE_LABEL,
                color: palette::DID_NOT_SURVIVE,
            },
            LegendEntry {
                name: palette::SURVIVED_LABEL,
                color: palette::SURVIVED,
            },
        ],
        symbol_legend: Sex::ALL
            .iter()
            .map(|sex| SymbolLegendEntry {
                name: sex.label(),
                symbol: symbol_for(*sex),
            })
            .collect(),
    }
}

fn details(p: &Passenger) -> PointDetails {
    PointDetails {
        name: p.name.clone(),
        class: p.pclass.label(),
        embarked: p.embarked.code(),
        age: format!("{:.0}", p.age),
        fare: format!("£{:.2}", p.fare),
        family_size: p.family_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dataset, row};
    use passenger_data::PassengerClass;
    use std::collections::HashSet;

    fn sample() -> Dataset {
        let mut rows = vec![
            row(Sex::Male, 22.0, PassengerClass::Third, 7.25, false),
            row(Sex::Female, 38.0, PassengerClass::First, 71.2833, true),
            row(Sex::Female, 4.0, PassengerClass::Third, 16.7, true),
            row(Sex::Male, 2.0, PassengerClass::Third, 21.075, false),
        ];
        rows[1].sib_sp = 1;
        rows[2].sib_sp = 1;
        rows[2].parch = 1;
        rows[3].sib_sp = 3;
        rows[3].parch = 1;
        dataset(rows)
    }

    #[test]
    fn test_one_point_per_passenger() {
        let data = sample();
        let spec = build_scatter(&data);
        assert_eq!(spec.points.len(), data.len());
        for (point, passenger) in spec.points.iter().zip(data.passengers()) {
            assert_eq!(point.x, passenger.age);
            assert_eq!(point.y, passenger.fare);
            assert_eq!(point.details.name, passenger.name);
        }
    }

    #[test]
    fn test_two_colors_two_symbols() {
        let spec = build_scatter(&sample());
        let colors: HashSet<&str> = spec.points.iter().map(|p| p.color).collect();
        assert_eq!(colors, HashSet::from([palette::SURVIVED, palette::DID_NOT_SURVIVE]));
        assert_eq!(spec.points[0].symbol, MarkerSymbol::Diamond);
        assert_eq!(spec.points[1].symbol, MarkerSymbol::Circle);
        assert_eq!(spec.points[1].color, palette::SURVIVED);
    }

    #[test]
    fn test_size_monotonic_in_family_size() {
        let spec = build_scatter(&sample());
        // family sizes 1, 2, 3, 5
        let sizes: Vec<f64> = spec.points.iter().map(|p| p.size).collect();
        assert_eq!(sizes[0], MIN_MARKER_SIZE);
        assert_eq!(sizes[3], MAX_MARKER_SIZE);
        assert!(sizes[0] < sizes[1] && sizes[1] < sizes[2] && sizes[2] < sizes[3]);
    }

    #[test]
    fn test_uniform_family_size() {
        let data = dataset(vec![
            row(Sex::Male, 30.0, PassengerClass::Third, 7.0, false),
            row(Sex::Female, 31.0, PassengerClass::Third, 8.0, true),
        ]);
        let spec = build_scatter(&data);
        assert!(spec.points.iter().all(|p| p.size == 18.0));
    }

    #[test]
    fn test_hover_details() {
        let spec = build_scatter(&sample());
        let details = &spec.points[1].details;
        assert_eq!(details.class, "1st Class");
        assert_eq!(details.embarked, "S");
        assert_eq!(details.age, "38");
        assert_eq!(details.fare, "£71.28");
        assert_eq!(details.family_size, 2);

        let json = serde_json::to_value(details).unwrap();
        assert!(json.get("survived").is_none());
        assert!(json.get("sex").is_none());
    }

    #[test]
    fn test_idempotent() {
        let data = sample();
        assert_eq!(build_scatter(&data), build_scatter(&data));
        assert_eq!(
            serde_json::to_string(&build_scatter(&data)).unwrap(),
            serde_json::to_string(&build_scatter(&data)).unwrap()
        );
    }
}
