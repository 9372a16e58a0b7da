//! Chart Specification Builder
//!
//! Pure functions from the enriched passenger table to chart
//! specifications. Nothing here renders; the output is serializable data
//! handed to whatever draws it.

mod aggregate;
mod chart;
mod dashboard;
mod insights;
pub mod palette;
mod scatter;

pub use aggregate::{group_rate, GroupRate};
pub use chart::{
    Axis, Bar, BarChart, BoxChart, BoxSeries, Chart, DashboardSpec, HistogramChart,
    HistogramSeries, LegendEntry, MarkerSymbol, Panel, PointDetails, ScatterPoint, ScatterSpec,
    SymbolLegendEntry,
};
pub use dashboard::{build_dashboard, AGE_HISTOGRAM_BINS};
pub use insights::{build_insights, FamilyBucket, InsightsSpec};
pub use scatter::{build_scatter, MAX_MARKER_SIZE, MIN_MARKER_SIZE};
