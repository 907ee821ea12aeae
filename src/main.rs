// Main entry point - Dependency injection and page host setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::error::DashboardError;
use crate::application::fetcher::SeriesFetcher;
use crate::application::renderer::ChartRenderer;
use crate::application::series_store::SeriesStore;
use crate::infrastructure::canvas::CanvasSlot;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_source::HttpSeriesSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    attach_mount, current_chart, dashboard_page, detach_mount, field_status, field_statuses,
    health_check, render_demo, render_field,
};

pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/chart", get(current_chart))
        .route("/status", get(field_statuses))
        .route("/status/:field", get(field_status))
        .route("/mount", put(attach_mount).delete(detach_mount))
        .route("/render/:field", post(render_field))
        .route("/render-demo", post(render_demo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Data source and session store (infrastructure layer)
    let source = Arc::new(HttpSeriesSource::new(
        config.source.base_url.clone(),
        config.source.request_timeout_secs.map(Duration::from_secs),
    )?);
    let store = SeriesStore::new();
    let canvas = Arc::new(CanvasSlot::new(config.page.mount_id.clone()));

    // Fetch and render use cases (application layer)
    let fetcher = SeriesFetcher::new(source, store);
    let renderer = ChartRenderer::new(fetcher, canvas.clone()).with_error_handler(Arc::new(
        |field: &str, e: &DashboardError| tracing::error!("Chart for {} not drawn: {}", field, e),
    ));

    // Startup renders run in the background; failures stay in the log and /status
    if config.startup.demo {
        // A failed draw has already been logged by the error handler
        if let Err(e) = renderer.render_demo_chart() {
            tracing::debug!("Continuing without demo chart: {}", e);
        }
    } else {
        let startup = renderer.clone();
        let fields = config.startup.fields.clone();
        tokio::spawn(async move {
            let renders = fields.iter().map(|field| startup.render_chart(field));
            futures::future::join_all(renders).await;
        });
    }

    let state = Arc::new(AppState {
        renderer,
        canvas,
        title: config.page.title.clone(),
    });

    // Start server
    let addr: SocketAddr = config.page.listen.parse()?;
    tracing::info!(
        "Starting hive-dashboard on {} (data from {})",
        addr,
        config.source.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
