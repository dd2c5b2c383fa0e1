//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    diseases::{api_disease_detail, api_diseases},
    home::{home_page, query_submit},
    predict::api_predict,
    status::api_status,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(home_page))
        .route("/query", post(query_submit))

        // API endpoints
        .route("/api/predict", post(api_predict))
        .route("/api/diseases", get(api_diseases))
        .route("/api/diseases/{name}", get(api_disease_detail))
        .route("/api/status", get(api_status))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
