//! Handlers for the `/programas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sysasistencia_core::error::CoreError;
use sysasistencia_core::response::CustomResponse;
use sysasistencia_core::types::DbId;
use sysasistencia_core::validation::validate_input;

use crate::dto::ProgramaEstudioDto;
use crate::error::AppResult;
use crate::mappers::programa_estudio::{to_dto, to_dtos, to_entity};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /programas
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<ProgramaEstudioDto>>> {
    let programas = state.programas.find_all().await?;
    Ok(Json(to_dtos(&programas)))
}

/// GET /programas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProgramaEstudioDto>> {
    let programa = state.programas.find_by_id(id).await?;
    Ok(Json(to_dto(&programa)))
}

/// GET /programas/buscarmaxid
///
/// Plain scalar body; `0` when no program exists yet.
pub async fn find_max_id(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<DbId>> {
    let max_id = state.programas.find_max_id().await?;
    Ok(Json(max_id.unwrap_or_default()))
}

/// POST /programas
///
/// Always inserts: an `idPrograma` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ProgramaEstudioDto>,
) -> AppResult<(StatusCode, Json<ProgramaEstudioDto>)> {
    validate_input(&input)?;

    if state.programas.exists_by_nombre(&input.nombre).await? {
        return Err(CoreError::Conflict(format!(
            "Programa de estudio '{}' already exists",
            input.nombre
        ))
        .into());
    }

    let facultad = state.facultades.find_by_id(input.facultad_id).await?;
    let mut programa = to_entity(input, facultad);
    programa.id_programa = None;

    let saved = state.programas.save(programa).await?;
    tracing::info!(
        id_usuario = user.id_usuario,
        rol = %user.rol,
        id_programa = ?saved.id_programa,
        "Programa de estudio created"
    );
    Ok((StatusCode::CREATED, Json(to_dto(&saved))))
}

/// PUT /programas/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ProgramaEstudioDto>,
) -> AppResult<Json<ProgramaEstudioDto>> {
    validate_input(&input)?;

    let facultad = state.facultades.find_by_id(input.facultad_id).await?;
    let updated = state
        .programas
        .update(id, to_entity(input, facultad))
        .await?;
    tracing::info!(id_usuario = user.id_usuario, rol = %user.rol, id, "Programa de estudio updated");
    Ok(Json(to_dto(&updated)))
}

/// DELETE /programas/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CustomResponse>> {
    let response = state.programas.delete(id).await?;
    tracing::info!(id_usuario = user.id_usuario, rol = %user.rol, id, "Programa de estudio deleted");
    Ok(Json(response))
}
