//! Handlers for script submission, retrieval, listing, and removal.
//!
//! Submitted scripts are stored as opaque text; nothing is ever executed.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use scriptbox_core::types::{ScriptEntry, ScriptId, ScriptSummary};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Submission payload, accepted as a JSON or form body, or as query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitScript {
    /// Script text. Required and non-empty.
    pub script: Option<String>,
    /// Free-text owner label.
    pub player: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: ScriptId,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: ScriptId,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub scripts: BTreeMap<ScriptId, ScriptSummary>,
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// POST /execute
///
/// Accepts a form-encoded body (`application/x-www-form-urlencoded`) or
/// JSON. An empty body or a JSON `null` counts as `{}` and then fails
/// validation. Any other body that does not decode is a malformed request.
pub async fn submit_body(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Json<SubmitResponse>> {
    let input = if is_form(request.headers()) {
        let Form(input) = Form::<SubmitScript>::from_request(request, &state)
            .await
            .map_err(|e| AppError::MalformedBody(e.body_text()))?;
        input
    } else {
        let body = Bytes::from_request(request, &state)
            .await
            .map_err(|e| AppError::InternalError(e.body_text()))?;
        parse_json_body(&body)?
    };

    submit(&state, input)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

fn parse_json_body(body: &[u8]) -> AppResult<SubmitScript> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SubmitScript::default());
    }
    serde_json::from_slice::<Option<SubmitScript>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| AppError::MalformedBody(e.to_string()))
}

/// GET /execute?script=...&player=...
pub async fn submit_query(
    State(state): State<AppState>,
    query: Result<Query<SubmitScript>, QueryRejection>,
) -> AppResult<Json<SubmitResponse>> {
    let Query(input) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    submit(&state, input)
}

fn submit(state: &AppState, input: SubmitScript) -> AppResult<Json<SubmitResponse>> {
    let content = input.script.unwrap_or_default();
    let size = content.len();

    let id = state.store.submit(content, input.player)?;

    tracing::info!(script_id = %id, size, "Script stored");

    Ok(Json(SubmitResponse { success: true, id }))
}

// ---------------------------------------------------------------------------
// Single-script endpoints
// ---------------------------------------------------------------------------

/// GET /script/{id}
pub async fn get_script(
    State(state): State<AppState>,
    Path(id): Path<ScriptId>,
) -> AppResult<Json<ScriptEntry>> {
    let entry = state.store.get(&id)?;
    Ok(Json(entry))
}

/// DELETE /script/{id}
pub async fn delete_script(
    State(state): State<AppState>,
    Path(id): Path<ScriptId>,
) -> AppResult<Json<DeleteResponse>> {
    state.store.delete(&id)?;

    tracing::info!(script_id = %id, "Script deleted");

    Ok(Json(DeleteResponse { success: true, id }))
}

// ---------------------------------------------------------------------------
// Bulk endpoints
// ---------------------------------------------------------------------------

/// GET /all
///
/// Lists every live script as `id -> {player, preview}`.
pub async fn list_scripts(State(state): State<AppState>) -> Json<ListResponse> {
    let scripts = state.store.list_summaries();
    Json(ListResponse {
        count: scripts.len(),
        scripts,
    })
}

/// POST /clear
pub async fn clear_scripts(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.store.clear_all();

    tracing::info!(removed, "Script store cleared");

    Json(ClearResponse { success: true })
}
