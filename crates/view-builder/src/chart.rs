//! Chart Specification Types

use feature_engine::BoxSummary;
use serde::Serialize;

/// Axis description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub show_grid: bool,
}

impl Axis {
    pub fn new(title: &str, show_grid: bool) -> Self {
        Self {
            title: title.to_string(),
            show_grid,
        }
    }
}

/// Legend item keyed by color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: &'static str,
    pub color: &'static str,
}

/// One category bar with its underlying counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    /// Survival rate in percent
    pub value: f64,
    /// Rounded percentage shown above the bar, e.g. "74.2%"
    pub label: String,
    pub color: &'static str,
    pub count: usize,
    pub survived: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
}

/// Counts per bin for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub opacity: f64,
    pub counts: Vec<usize>,
}

/// Overlaid histograms sharing one set of bin edges.
/// Bins are `[edge[i], edge[i + 1])`, the last one closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramChart {
    pub bin_edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub summary: BoxSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxChart {
    pub series: Vec<BoxSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chart {
    Bar(BarChart),
    Histogram(HistogramChart),
    Box(BoxChart),
}

/// One cell of the dashboard grid (rows and columns are 1-based)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub row: u8,
    pub col: u8,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub chart: Chart,
}

/// The 2×2 overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSpec {
    pub title: String,
    pub subtitle: String,
    pub rows: u8,
    pub cols: u8,
    pub height: u32,
    pub panels: Vec<Panel>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    Circle,
    Diamond,
}

/// Hover details for a scatter point. Outcome and sex are carried by
/// color and symbol instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointDetails {
    pub name: String,
    pub class: &'static str,
    pub embarked: &'static str,
    pub age: String,
    pub fare: String,
    pub family_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Marker diameter in pixels
    pub size: f64,
    pub color: &'static str,
    pub symbol: MarkerSymbol,
    pub details: PointDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolLegendEntry {
    pub name: &'static str,
    pub symbol: MarkerSymbol,
}

/// Per-passenger age/fare scatter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub height: u32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<ScatterPoint>,
    pub color_legend: Vec<LegendEntry>,
    pub symbol_legend: Vec<SymbolLegendEntry>,
}
