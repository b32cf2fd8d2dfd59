pub mod health;
pub mod scripts;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the public route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                    capability listing (GET)
/// /status              liveness and script count (GET)
///
/// /execute             submit a script (POST JSON body, GET query)
/// /script/{id}         get, delete
/// /all                 list previews (GET)
/// /clear               drop every script (POST)
/// ```
///
/// No route requires authentication.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/status", get(handlers::index::status))
        .merge(scripts::router())
}
