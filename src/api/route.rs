use crate::{
    api::{error::ApiError, report::render_report},
    ingest::run_sweep,
    state::AppState,
};
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/fetch", get(trigger_sweep))
        .route("/usd", get(latest_report))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

// GET /fetch handler
async fn trigger_sweep(State(state): State<Arc<AppState>>) -> Result<&'static str, ApiError> {
    info!("Manual sweep requested");

    let result = run_sweep(&state.storage, state.fetcher.as_ref()).await;
    state.failure_policy().check("manual sweep", result)?;

    Ok("OK\n")
}

// GET /usd handler
async fn latest_report(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let result = state.storage.latest_report().await;
    let rows = state.failure_policy().check("latest report", result)?;

    Ok(Html(render_report(&rows)))
}
