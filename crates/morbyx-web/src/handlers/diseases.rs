//! Disease index browsing API.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use morbyx_common::error::ApiError;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct DiseaseSummary {
    pub name: String,
    pub symptom_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DiseaseDetail {
    pub name: String,
    pub symptoms: Vec<String>,
}

/// GET /api/diseases — all indexed diseases in first-seen dataset order.
pub async fn api_diseases(State(state): State<SharedState>) -> impl IntoResponse {
    let diseases: Vec<DiseaseSummary> = state
        .index
        .profiles()
        .iter()
        .map(|p| DiseaseSummary {
            name: p.name.clone(),
            symptom_count: p.symptoms.len(),
        })
        .collect();
    Json(diseases)
}

/// GET /api/diseases/{name} — one profile with its sorted symptom list.
pub async fn api_disease_detail(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .index
        .get(&name)
        .ok_or_else(|| ApiError::NotFound(format!("unknown disease: {name}")))?;

    let mut symptoms: Vec<String> = profile.symptoms.iter().cloned().collect();
    symptoms.sort();
    Ok(Json(DiseaseDetail {
        name: profile.name.clone(),
        symptoms,
    }))
}
