//! Axum server wiring for the TubeMetrics JSON API.
//!
//! Registers the dashboard routes, applies permissive CORS so the frontend
//! can call the API from any origin, and owns the shared application state.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tubemetrics_api::VideoDataService;

use crate::handlers::{api_categories, api_search, api_top_channels, api_trending, home};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The video data service the handlers delegate to
    pub video_service: Arc<VideoDataService>,
}

/// Builds the application router with all routes and CORS applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        // JSON API endpoints consumed by the dashboard frontend
        .route("/api/trending", get(api_trending))
        .route("/api/categories", get(api_categories))
        .route("/api/top-channels", get(api_top_channels))
        .route("/api/search", get(api_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the JSON API server until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails while
/// serving connections.
pub async fn run_server(service: VideoDataService, host: &str, port: u16) -> std::io::Result<()> {
    let state = AppState {
        video_service: Arc::new(service),
    };
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("TubeMetrics API server running on http://{addr}");
    axum::serve(listener, app).await
}
