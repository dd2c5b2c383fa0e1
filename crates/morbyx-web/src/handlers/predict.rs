//! Prediction API — ranks indexed diseases against the submitted symptoms.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use morbyx_common::error::ApiError;
use morbyx_ranker::{rank, Prediction, RankOptions};

use crate::state::SharedState;

/// Upper bound on a caller-supplied result limit.
const MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symptoms: String,
    pub limit: Option<usize>,
    pub min_score: Option<f64>,
    pub include_matched: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predictions: Vec<Prediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/predict — rank diseases against a comma-separated symptom list.
///
/// An empty or whitespace-only `symptoms` field is a client error; a valid
/// query that matches nothing is a 200 with an explicit "No match" message,
/// so callers can tell the two apart.
pub async fn api_predict(
    State(state): State<SharedState>,
    Json(req): Json<PredictRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.symptoms.trim().is_empty() {
        return Err(ApiError::BadRequest("Symptoms cannot be empty".to_string()));
    }

    let opts = RankOptions {
        limit: req.limit.unwrap_or(state.ranker.limit).min(MAX_LIMIT),
        min_score: req.min_score.unwrap_or(state.ranker.min_score),
        include_matched: req.include_matched.unwrap_or(false),
    };
    let predictions = rank(&state.index, &req.symptoms, &opts);

    let message = if predictions.is_empty() {
        Some("No match".to_string())
    } else {
        None
    };
    Ok(Json(PredictResponse {
        predictions,
        message,
    }))
}
