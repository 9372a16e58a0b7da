//! Overview Dashboard

use crate::aggregate::group_rate;
use crate::chart::{
    Axis, Bar, BarChart, BoxChart, BoxSeries, Chart, DashboardSpec, HistogramChart,
    HistogramSeries, LegendEntry, Panel,
};
use crate::palette;
use feature_engine::{BoxSummary, Dataset, Passenger};
use passenger_data::{PassengerClass, Sex};
use tracing::debug;

/// Both age histograms share this many equal-width bins
pub const AGE_HISTOGRAM_BINS: usize = 25;

const HISTOGRAM_OPACITY: f64 = 0.7;

/// Build the 2×2 survival dashboard
pub fn build_dashboard(dataset: &Dataset) -> DashboardSpec {
    let passengers = dataset.passengers();
    let summary = dataset.summary();

    let panels = vec![
        Panel {
            title: "Survival Rate by Gender".to_string(),
            row: 1,
            col: 1,
            x_axis: Axis::new("Gender", false),
            y_axis: Axis::new("Survival Rate (%)", true),
            chart: Chart::Bar(gender_bars(passengers)),
        },
        Panel {
            title: "Survival Rate by Passenger Class".to_string(),
            row: 1,
            col: 2,
            x_axis: Axis::new("Passenger Class", false),
            y_axis: Axis::new("Survival Rate (%)", true),
            chart: Chart::Bar(class_bars(passengers)),
        },
        Panel {
            title: "Age Distribution: Survived vs Died".to_string(),
            row: 2,
            col: 1,
            x_axis: Axis::new("Age (years)", true),
            y_axis: Axis::new("Number of Passengers", true),
            chart: Chart::Histogram(age_histogram(passengers)),
        },
        Panel {
            title: "Fare Distribution: Survived vs Died".to_string(),
            row: 2,
            col: 2,
            x_axis: Axis::new("", false),
            y_axis: Axis::new("Fare (British Pounds)", true),
            chart: Chart::Box(fare_boxes(passengers)),
        },
    ];

    DashboardSpec {
        title: "Titanic Survival Analysis Dashboard".to_string(),
        subtitle: format!(
            "{} of {} passengers survived ({:.1}%)",
            summary.survived, summary.total, summary.survival_rate
        ),
        rows: 2,
        cols: 2,
        height: 800,
        panels,
        legend: vec![
            LegendEntry {
                name: palette::SURVIVED_LABEL,
                color: palette::SURVIVED,
            },
            LegendEntry {
                name: palette::DID_NOT_SURVIVE_LABEL,
                color: palette::DID_NOT_SURVIVE,
            },
        ],
    }
}

fn rate_bar(label: &str, color: &'static str, members: Vec<&Passenger>) -> Option<Bar> {
    let rate = group_rate(label, members)?;
    Some(Bar {
        label: format!("{:.1}%", rate.rate),
        value: rate.rate,
        category: rate.label,
        color,
        count: rate.count,
        survived: rate.survived,
    })
}

fn gender_bars(passengers: &[Passenger]) -> BarChart {
    let bars = Sex::ALL
        .iter()
        .zip(palette::GENDER)
        .filter_map(|(sex, color)| {
            let members = passengers.iter().filter(|p| p.sex == *sex).collect();
            rate_bar(sex.label(), color, members)
        })
        .collect();
    BarChart { bars }
}

fn class_bars(passengers: &[Passenger]) -> BarChart {
    let bars = PassengerClass::ALL
        .iter()
        .zip(palette::CLASS)
        .filter_map(|(class, color)| {
            let members = passengers.iter().filter(|p| p.pclass == *class).collect();
            rate_bar(class.label(), color, members)
        })
        .collect();
    BarChart { bars }
}

fn age_histogram(passengers: &[Passenger]) -> HistogramChart {
    let min = passengers.iter().map(|p| p.age).fold(f64::MAX, f64::min);
    let max = passengers.iter().map(|p| p.age).fold(f64::MIN, f64::max);
    let (min, width) = if passengers.is_empty() {
        (0.0, 1.0)
    } else if max > min {
        (min, (max - min) / AGE_HISTOGRAM_BINS as f64)
    } else {
        (min, 1.0)
    };

    let bin_edges: Vec<f64> = (0..=AGE_HISTOGRAM_BINS)
        .map(|i| min + width * i as f64)
        .collect();

    let counts_for = |survived: bool| {
        let mut counts = vec![0usize; AGE_HISTOGRAM_BINS];
        for p in passengers.iter().filter(|p| p.survived == survived) {
            let idx = ((p.age - min) / width).floor() as usize;
            counts[idx.min(AGE_HISTOGRAM_BINS - 1)] += 1;
        }
        counts
    };

    debug!(
        "Age histogram spans [{}, {}] in {} bins",
        min,
        min + width * AGE_HISTOGRAM_BINS as f64,
        AGE_HISTOGRAM_BINS
    );

    HistogramChart {
        series: vec![
            HistogramSeries {
                name: palette::SURVIVED_LABEL,
                color: palette::SURVIVED,
                opacity: HISTOGRAM_OPACITY,
                counts: counts_for(true),
            },
            HistogramSeries {
                name: palette::DID_NOT_SURVIVE_LABEL,
                color: palette::DID_NOT_SURVIVE,
                opacity: HISTOGRAM_OPACITY,
                counts: counts_for(false),
            },
        ],
        bin_edges,
    }
}

fn fare_boxes(passengers: &[Passenger]) -> BoxChart {
    let series = [true, false]
        .into_iter()
        .filter_map(|survived| {
            let fares: Vec<f64> = passengers
                .iter()
                .filter(|p| p.survived == survived)
                .map(|p| p.fare)
                .collect();
            BoxSummary::compute(&fares).map(|summary| BoxSeries {
                name: palette::outcome_label(survived),
                color: palette::outcome_color(survived),
                summary,
            })
        })
        .collect();
    BoxChart { series }
}
