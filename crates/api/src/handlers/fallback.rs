//! JSON responses for requests that match no route or no method.
//!
//! The CORS layer answers preflight requests before routing. Any `OPTIONS`
//! request that still reaches a fallback gets an empty 204 and never touches
//! the store.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Unknown path.
pub async fn not_found(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "code": "NOT_FOUND",
        })),
    )
        .into_response()
}

/// Known path, unsupported method.
pub async fn method_not_allowed(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": format!("Method {method} not allowed"),
            "code": "METHOD_NOT_ALLOWED",
        })),
    )
        .into_response()
}
