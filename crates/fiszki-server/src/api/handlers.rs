use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use fiszki_types::{ExtractionRequest, ExtractionResponse, NoteSummary};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::state::{DEFAULT_NOTES_LIMIT, MAX_NOTES_LIMIT, ServerState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
    pub model: String,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.extractor.provider_metadata().name,
        model: state.extractor.settings().model.clone(),
    })
}

/// `POST /api/flashcards`
pub async fn extract_flashcards(
    State(state): State<ServerState>,
    payload: Result<Json<ExtractionRequest>, JsonRejection>,
) -> Result<Json<ExtractionResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected extraction body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;

    let flashcards = state
        .extractor
        .extract(&request.note_id)
        .await
        .inspect_err(|e| tracing::warn!("Extraction for note {:?} failed: {}", request.note_id, e))?;

    Ok(Json(ExtractionResponse { flashcards }))
}

#[derive(Debug, Deserialize)]
pub struct NotesQuery {
    pub limit: Option<usize>,
}

/// `GET /api/notes`
pub async fn list_notes(
    State(state): State<ServerState>,
    query: Result<Query<NotesQuery>, QueryRejection>,
) -> Result<Json<Vec<NoteSummary>>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_NOTES_LIMIT)
        .clamp(1, MAX_NOTES_LIMIT);

    let notes = state
        .extractor
        .list_notes(limit)
        .await
        .inspect_err(|e| tracing::warn!("Listing notes failed: {}", e))?;

    Ok(Json(notes))
}
