//! Route definitions for the `/facultades` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::facultad;
use crate::state::AppState;

/// Routes mounted at `/facultades`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(facultad::list).post(facultad::create))
        .route(
            "/{id}",
            get(facultad::get_by_id)
                .put(facultad::update)
                .delete(facultad::delete),
        )
}
