//! Notes CRUD handlers

use super::{dto::NoteRequest, error::ApiError, server::AppState};
use crate::types::{Note, NoteId};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

type ApiResult<T> = std::result::Result<T, ApiError>;

fn parse_id(raw: &str) -> ApiResult<NoteId> {
    NoteId::parse(raw).ok_or_else(ApiError::note_not_found)
}

/// A request without a JSON content type counts as an empty body, so it
/// reaches the store and gets the usual 400/404.
fn parse_body(body: Result<Json<NoteRequest>, JsonRejection>) -> ApiResult<NoteRequest> {
    match body {
        Ok(Json(req)) => Ok(req),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(NoteRequest::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// GET /api/notes
pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.store.list().await)
}

/// GET /api/notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Note>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.store.get(id).await?))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<NoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let draft = parse_body(body)?.into_draft();
    let note = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/:id
pub async fn update_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<NoteRequest>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let draft = parse_body(body)?.into_draft();
    let id = parse_id(&raw_id)?;
    Ok(Json(state.store.update(id, draft).await?))
}

/// DELETE /api/notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub notes: usize,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        notes: state.store.len().await,
    })
}
