//! Route definitions for the `/programas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::programa_estudio;
use crate::state::AppState;

/// Routes mounted at `/programas`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /buscarmaxid   -> find_max_id
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(programa_estudio::list).post(programa_estudio::create),
        )
        .route("/buscarmaxid", get(programa_estudio::find_max_id))
        .route(
            "/{id}",
            get(programa_estudio::get_by_id)
                .put(programa_estudio::update)
                .delete(programa_estudio::delete),
        )
}
