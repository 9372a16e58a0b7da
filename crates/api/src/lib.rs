//! Titanic Survival Dashboard Server
//!
//! Serves the dashboard page and the chart specifications it renders.
//! The passenger table is loaded and enriched once at startup and shared
//! read-only by every handler.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use feature_engine::{Dataset, FeatureDeriver, FeatureError};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use passenger_data::{DataError, DatasetLoader};
use serde::Serialize;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod rate_limit;
mod routes;

use crate::config::{AppConfig, DatasetConfig, LoggingConfig};
use crate::rate_limit::{create_governor_config, RateLimitConfig};

/// Dashboard errors
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Feature(#[from] FeatureError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid rate limit: {0}")]
    RateLimit(String),
    #[error("Logging setup failed: {0}")]
    Logging(String),
    #[error("Metrics setup failed: {0}")]
    Metrics(String),
}

/// Application state shared across handlers
pub struct AppState {
    /// Enriched passenger table, immutable after startup
    pub dataset: Dataset,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Prometheus handle when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: Dataset, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            dataset,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            metrics,
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub passengers: usize,
}

/// Load the manifest and derive the enriched table
pub fn load_dataset(config: &DatasetConfig) -> Result<Dataset, DashboardError> {
    let raw = DatasetLoader::default().load_path(&config.path)?;
    let dataset = FeatureDeriver::new(config.fill_port).derive(raw)?;
    Ok(dataset)
}

/// Create the application router
pub fn create_router(
    state: Arc<AppState>,
    rate_limit: &RateLimitConfig,
) -> Result<Router, DashboardError> {
    let governor = create_governor_config(rate_limit)?;

    let api = Router::new()
        .route("/api/v1/health", get(health_handler))
        .route(
            "/api/v1/visualizations",
            get(routes::visualizations::get_visualizations),
        )
        .route(
            "/api/v1/visualizations/dashboard",
            get(routes::visualizations::get_dashboard),
        )
        .route(
            "/api/v1/visualizations/scatter",
            get(routes::visualizations::get_scatter),
        )
        .route("/api/v1/summary", get(routes::summary::get_summary))
        .route("/api/v1/insights", get(routes::summary::get_insights))
        .layer(GovernorLayer { config: governor });

    Ok(Router::new()
        .route("/", get(routes::page::index))
        .route("/metrics", get(routes::page::metrics))
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state))
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        passengers: state.dataset.len(),
    })
}

/// Initialize logging
pub fn init_logging(config: &LoggingConfig) -> Result<(), DashboardError> {
    let level = Level::from_str(&config.level)
        .map_err(|e| DashboardError::Logging(format!("{}: {}", config.level, e)))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| DashboardError::Logging(e.to_string()))
}

/// Install the global Prometheus recorder
pub fn install_metrics() -> Result<PrometheusHandle, DashboardError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| DashboardError::Metrics(e.to_string()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

/// Load the dataset and run the server until Ctrl-C
pub async fn run_server(config: AppConfig) -> Result<(), DashboardError> {
    let dataset = load_dataset(&config.dataset)?;
    let summary = dataset.summary();
    info!(
        "Dataset ready: {} passengers, {} survived ({:.1}%)",
        summary.total, summary.survived, summary.survival_rate
    );

    let metrics = install_metrics()?;
    let state = Arc::new(AppState::new(dataset, Some(metrics)));
    let app = create_router(state, &config.rate_limit)?;

    let addr = config.server.addr();
    info!("Starting dashboard server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
