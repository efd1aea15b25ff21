//! Study program service.

use std::sync::Arc;

use sysasistencia_core::error::CoreError;
use sysasistencia_core::response::CustomResponse;
use sysasistencia_core::types::DbId;
use sysasistencia_db::models::programa_estudio::ProgramaEstudio;
use sysasistencia_db::repositories::ProgramaEstudioRepository;

use crate::error::{AppError, AppResult};

const ENTITY: &str = "ProgramaEstudio";

/// CRUD rules for study programs on top of a [`ProgramaEstudioRepository`].
pub struct ProgramaEstudioService {
    repo: Arc<dyn ProgramaEstudioRepository>,
}

impl ProgramaEstudioService {
    pub fn new(repo: Arc<dyn ProgramaEstudioRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<ProgramaEstudio>> {
        Ok(self.repo.find_all().await?)
    }

    /// Fails with `NotFound` (`ID NOT FOUND: {id}`) when no program has `id`.
    pub async fn find_by_id(&self, id: DbId) -> AppResult<ProgramaEstudio> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id).into())
    }

    /// Absence is a normal outcome here, unlike [`Self::find_by_id`].
    pub async fn find_by_nombre(&self, nombre: &str) -> AppResult<Option<ProgramaEstudio>> {
        Ok(self.repo.find_by_nombre(nombre).await?)
    }

    pub async fn exists_by_nombre(&self, nombre: &str) -> AppResult<bool> {
        Ok(self.repo.exists_by_nombre(nombre).await?)
    }

    /// Persist `programa` as given and return the stored value.
    ///
    /// Name uniqueness is not checked here; callers use
    /// [`Self::exists_by_nombre`] beforehand and the storage constraint
    /// rejects whatever slips through.
    pub async fn save(&self, programa: ProgramaEstudio) -> AppResult<ProgramaEstudio> {
        let saved = self.repo.save(&programa).await?;
        tracing::debug!(id = ?saved.id_programa, nombre = %saved.nombre, "Programa de estudio saved");
        Ok(saved)
    }

    /// Overwrite the program stored under `id` with the fields of `programa`.
    ///
    /// The id is taken from the argument, never from `programa`, so the
    /// identity of the row cannot change through an update.
    pub async fn update(&self, id: DbId, mut programa: ProgramaEstudio) -> AppResult<ProgramaEstudio> {
        self.find_by_id(id).await?;

        programa.id_programa = Some(id);
        let updated = self.repo.save(&programa).await.map_err(|e| match e {
            sqlx::Error::RowNotFound => CoreError::not_found(ENTITY, id).into(),
            other => AppError::from(other),
        })?;
        tracing::debug!(id, "Programa de estudio updated");
        Ok(updated)
    }

    /// Remove the program stored under `id`.
    pub async fn delete(&self, id: DbId) -> AppResult<CustomResponse> {
        self.find_by_id(id).await?;

        if !self.repo.delete_by_id(id).await? {
            return Err(CoreError::not_found(ENTITY, id).into());
        }
        tracing::debug!(id, "Programa de estudio deleted");
        Ok(CustomResponse::success(format!(
            "Programa de estudio {id} eliminado correctamente"
        )))
    }

    /// Highest assigned program id, if any program exists.
    pub async fn find_max_id(&self) -> AppResult<Option<DbId>> {
        Ok(self.repo.find_max_id().await?)
    }
}
