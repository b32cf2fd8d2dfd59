//! Service discovery endpoints: capability listing and store status.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Routes advertised by `GET /`.
pub const ENDPOINTS: &[&str] = &[
    "/execute",
    "/script/:id",
    "/all",
    "/clear",
    "/status",
];

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
    pub warning: &'static str,
    pub endpoints: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub online: bool,
    pub scripts: usize,
}

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "Scriptbox proxy running",
        warning: "Open proxy: no authentication, any caller may read, submit, or delete scripts",
        endpoints: ENDPOINTS,
    })
}

/// GET /status
///
/// Reports liveness and the number of scripts currently held.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        online: true,
        scripts: state.store.count(),
    })
}
