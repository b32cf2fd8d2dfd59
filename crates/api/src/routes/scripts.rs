//! Route definitions for script storage.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::scripts;
use crate::state::AppState;

/// Script routes, mounted at the root.
///
/// ```text
/// POST   /execute      -> submit_body
/// GET    /execute      -> submit_query
/// GET    /script/{id}  -> get_script
/// DELETE /script/{id}  -> delete_script
/// GET    /all          -> list_scripts
/// POST   /clear        -> clear_scripts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/execute",
            post(scripts::submit_body).get(scripts::submit_query),
        )
        .route(
            "/script/{id}",
            get(scripts::get_script).delete(scripts::delete_script),
        )
        .route("/all", get(scripts::list_scripts))
        .route("/clear", post(scripts::clear_scripts))
}
