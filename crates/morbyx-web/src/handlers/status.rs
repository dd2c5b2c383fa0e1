//! Service status endpoint.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub diseases: usize,
    pub distinct_symptoms: usize,
    pub source_rows: usize,
    pub index_built_at: DateTime<Utc>,
    pub default_limit: usize,
    pub default_min_score: f64,
}

/// GET /api/status — index size and ranking defaults.
pub async fn api_status(State(state): State<SharedState>) -> impl IntoResponse {
    Json(StatusResponse {
        diseases: state.index.len(),
        distinct_symptoms: state.index.distinct_symptom_count(),
        source_rows: state.index.source_rows(),
        index_built_at: state.index.built_at(),
        default_limit: state.ranker.limit,
        default_min_score: state.ranker.min_score,
    })
}
