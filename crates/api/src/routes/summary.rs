//! Summary Routes

use axum::{extract::State, Json};
use feature_engine::{DatasetSummary, DerivationReport};
use serde::Serialize;
use std::sync::Arc;
use view_builder::{build_insights, InsightsSpec};

use crate::AppState;

/// Response for the summary endpoint
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: DatasetSummary,
    pub did_not_survive: usize,
    pub non_survival_rate: f64,
    pub report: DerivationReport,
}

/// Dataset totals and what derivation filled in
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let summary = state.dataset.summary().clone();
    Json(SummaryResponse {
        did_not_survive: summary.did_not_survive(),
        non_survival_rate: summary.non_survival_rate(),
        report: state.dataset.report().clone(),
        summary,
    })
}

/// Survival breakdowns by age group, fare group, family size and port
pub async fn get_insights(State(state): State<Arc<AppState>>) -> Json<InsightsSpec> {
    metrics::counter!("dashboard_views_built_total", "view" => "insights").increment(1);
    Json(build_insights(&state.dataset))
}
