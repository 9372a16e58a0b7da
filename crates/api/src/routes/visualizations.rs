//! Visualization Routes
//!
//! Each request rebuilds its charts from the shared table. Building is
//! pure, so concurrent requests never interact.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use view_builder::{build_dashboard, build_scatter, DashboardSpec, ScatterSpec};

use crate::AppState;

/// Both charts, as produced by the "load visualizations" action
#[derive(Debug, Serialize)]
pub struct VisualizationResponse {
    pub dashboard: DashboardSpec,
    pub scatter: ScatterSpec,
}

fn timed<T>(view: &'static str, build: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let spec = build();
    let elapsed = started.elapsed();

    metrics::counter!("dashboard_views_built_total", "view" => view).increment(1);
    metrics::histogram!("dashboard_view_build_seconds", "view" => view)
        .record(elapsed.as_secs_f64());
    debug!("Built {} view in {:?}", view, elapsed);

    spec
}

/// Build the overview dashboard, then the scatter
pub async fn get_visualizations(
    State(state): State<Arc<AppState>>,
) -> Json<VisualizationResponse> {
    let dashboard = timed("dashboard", || build_dashboard(&state.dataset));
    let scatter = timed("scatter", || build_scatter(&state.dataset));
    Json(VisualizationResponse { dashboard, scatter })
}

/// Build the overview dashboard only
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSpec> {
    Json(timed("dashboard", || build_dashboard(&state.dataset)))
}

/// Build the scatter only
pub async fn get_scatter(State(state): State<Arc<AppState>>) -> Json<ScatterSpec> {
    Json(timed("scatter", || build_scatter(&state.dataset)))
}
