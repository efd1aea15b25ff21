pub mod facultad;
pub mod health;
pub mod programa_estudio;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the root, no version prefix).
///
/// Route hierarchy:
///
/// ```text
/// /users/register                  register (public)
/// /users/login                     login (public)
///
/// /programas                       list, create
/// /programas/buscarmaxid           highest assigned program id
/// /programas/{id}                  get, update, delete
///
/// /facultades                      list, create
/// /facultades/{id}                 get, update, delete
/// ```
///
/// Everything except `/users/*` requires `Authorization: Bearer <token>`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/programas", programa_estudio::router())
        .nest("/facultades", facultad::router())
}
