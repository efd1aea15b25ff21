//! Handlers for the `/facultades` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sysasistencia_core::response::CustomResponse;
use sysasistencia_core::types::DbId;
use sysasistencia_core::validation::validate_input;
use sysasistencia_db::models::facultad::Facultad;

use crate::dto::FacultadDto;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /facultades
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Facultad>>> {
    let facultades = state.facultades.find_all().await?;
    Ok(Json(facultades))
}

/// GET /facultades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Facultad>> {
    let facultad = state.facultades.find_by_id(id).await?;
    Ok(Json(facultad))
}

/// POST /facultades
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<FacultadDto>,
) -> AppResult<(StatusCode, Json<Facultad>)> {
    validate_input(&input)?;
    let saved = state
        .facultades
        .save(Facultad::new(input.nombre, input.descripcion))
        .await?;
    tracing::info!(id_usuario = user.id_usuario, id_facultad = ?saved.id_facultad, "Facultad created");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /facultades/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<FacultadDto>,
) -> AppResult<Json<Facultad>> {
    validate_input(&input)?;
    let updated = state
        .facultades
        .update(id, Facultad::new(input.nombre, input.descripcion))
        .await?;
    tracing::info!(id_usuario = user.id_usuario, id, "Facultad updated");
    Ok(Json(updated))
}

/// DELETE /facultades/{id}
///
/// 409 while programs still reference the faculty.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CustomResponse>> {
    let response = state.facultades.delete(id).await?;
    tracing::info!(id_usuario = user.id_usuario, rol = %user.rol, id, "Facultad deleted");
    Ok(Json(response))
}
