//! Faculty service.

use std::sync::Arc;

use sysasistencia_core::error::CoreError;
use sysasistencia_core::response::CustomResponse;
use sysasistencia_core::types::DbId;
use sysasistencia_db::models::facultad::Facultad;
use sysasistencia_db::repositories::FacultadRepository;

use crate::error::{AppError, AppResult};

const ENTITY: &str = "Facultad";

/// CRUD rules for faculties on top of a [`FacultadRepository`].
///
/// Also resolves `facultadId` references for inbound program payloads.
pub struct FacultadService {
    repo: Arc<dyn FacultadRepository>,
}

impl FacultadService {
    pub fn new(repo: Arc<dyn FacultadRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Facultad>> {
        Ok(self.repo.find_all().await?)
    }

    /// Fails with `NotFound` when no faculty has `id`.
    pub async fn find_by_id(&self, id: DbId) -> AppResult<Facultad> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id).into())
    }

    pub async fn save(&self, facultad: Facultad) -> AppResult<Facultad> {
        let saved = self.repo.save(&facultad).await?;
        tracing::debug!(id = ?saved.id_facultad, nombre = %saved.nombre, "Facultad saved");
        Ok(saved)
    }

    pub async fn update(&self, id: DbId, mut facultad: Facultad) -> AppResult<Facultad> {
        self.find_by_id(id).await?;

        facultad.id_facultad = Some(id);
        let updated = self.repo.save(&facultad).await.map_err(|e| match e {
            sqlx::Error::RowNotFound => CoreError::not_found(ENTITY, id).into(),
            other => AppError::from(other),
        })?;
        tracing::debug!(id, "Facultad updated");
        Ok(updated)
    }

    /// Remove the faculty stored under `id`.
    ///
    /// Storage refuses while programs still reference it; that failure
    /// propagates as a foreign-key violation.
    pub async fn delete(&self, id: DbId) -> AppResult<CustomResponse> {
        self.find_by_id(id).await?;

        if !self.repo.delete_by_id(id).await? {
            return Err(CoreError::not_found(ENTITY, id).into());
        }
        tracing::debug!(id, "Facultad deleted");
        Ok(CustomResponse::success(format!(
            "Facultad {id} eliminada correctamente"
        )))
    }
}
