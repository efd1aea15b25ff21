//! Repository for the `programa_estudio` table.

use async_trait::async_trait;
use sqlx::PgPool;
use sysasistencia_core::types::DbId;

use crate::models::programa_estudio::{ProgramaEstudio, ProgramaEstudioRow};

/// Select list for a program joined with its faculty (aliases `p` and `f`).
const JOINED_COLUMNS: &str = "p.id_programa, p.nombre, p.descripcion, \
     f.id_facultad AS facultad_id, f.nombre AS facultad_nombre, \
     f.descripcion AS facultad_descripcion";

/// Storage operations on study programs.
///
/// Lookups return `Option`; a miss is not an error at this layer.
#[async_trait]
pub trait ProgramaEstudioRepository: Send + Sync {
    /// All programs ordered by id ascending. Empty when none exist.
    async fn find_all(&self) -> Result<Vec<ProgramaEstudio>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<ProgramaEstudio>, sqlx::Error>;

    /// Exact, case-sensitive name match.
    async fn find_by_nombre(&self, nombre: &str) -> Result<Option<ProgramaEstudio>, sqlx::Error>;

    async fn exists_by_nombre(&self, nombre: &str) -> Result<bool, sqlx::Error>;

    /// Insert when `id_programa` is `None`, otherwise update that row.
    ///
    /// Returns the persisted program re-read together with its faculty.
    async fn save(&self, programa: &ProgramaEstudio) -> Result<ProgramaEstudio, sqlx::Error>;

    /// Delete by id. Returns `true` if a row was removed; an absent id is a no-op.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Highest assigned program id, `None` on an empty table.
    async fn find_max_id(&self) -> Result<Option<DbId>, sqlx::Error>;
}

/// PostgreSQL-backed [`ProgramaEstudioRepository`].
#[derive(Clone)]
pub struct PgProgramaEstudioRepo {
    pool: PgPool,
}

impl PgProgramaEstudioRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, programa: &ProgramaEstudio) -> Result<ProgramaEstudio, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO programa_estudio (nombre, facultad_id, descripcion)
                VALUES ($1, $2, $3)
                RETURNING id_programa, nombre, descripcion, facultad_id
             )
             SELECT {JOINED_COLUMNS} FROM p JOIN facultad f ON f.id_facultad = p.facultad_id"
        );
        let row = sqlx::query_as::<_, ProgramaEstudioRow>(&query)
            .bind(&programa.nombre)
            .bind(programa.facultad_id())
            .bind(&programa.descripcion)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    /// Fails with `RowNotFound` when no row has the given id.
    async fn update(
        &self,
        id: DbId,
        programa: &ProgramaEstudio,
    ) -> Result<ProgramaEstudio, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE programa_estudio SET
                    nombre = $2,
                    facultad_id = $3,
                    descripcion = $4,
                    updated_at = NOW()
                WHERE id_programa = $1
                RETURNING id_programa, nombre, descripcion, facultad_id
             )
             SELECT {JOINED_COLUMNS} FROM p JOIN facultad f ON f.id_facultad = p.facultad_id"
        );
        let row = sqlx::query_as::<_, ProgramaEstudioRow>(&query)
            .bind(id)
            .bind(&programa.nombre)
            .bind(programa.facultad_id())
            .bind(&programa.descripcion)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }
}

#[async_trait]
impl ProgramaEstudioRepository for PgProgramaEstudioRepo {
    async fn find_all(&self) -> Result<Vec<ProgramaEstudio>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM programa_estudio p
             JOIN facultad f ON f.id_facultad = p.facultad_id
             ORDER BY p.id_programa ASC"
        );
        let rows = sqlx::query_as::<_, ProgramaEstudioRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(ProgramaEstudio::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<ProgramaEstudio>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM programa_estudio p
             JOIN facultad f ON f.id_facultad = p.facultad_id
             WHERE p.id_programa = $1"
        );
        let row = sqlx::query_as::<_, ProgramaEstudioRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(ProgramaEstudio::from))
    }

    async fn find_by_nombre(&self, nombre: &str) -> Result<Option<ProgramaEstudio>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM programa_estudio p
             JOIN facultad f ON f.id_facultad = p.facultad_id
             WHERE p.nombre = $1"
        );
        let row = sqlx::query_as::<_, ProgramaEstudioRow>(&query)
            .bind(nombre)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(ProgramaEstudio::from))
    }

    async fn exists_by_nombre(&self, nombre: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM programa_estudio WHERE nombre = $1)",
        )
        .bind(nombre)
        .fetch_one(&self.pool)
        .await
    }

    async fn save(&self, programa: &ProgramaEstudio) -> Result<ProgramaEstudio, sqlx::Error> {
        match programa.id_programa {
            Some(id) => self.update(id, programa).await,
            None => self.insert(programa).await,
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM programa_estudio WHERE id_programa = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_max_id(&self) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<DbId>>("SELECT MAX(id_programa) FROM programa_estudio")
            .fetch_one(&self.pool)
            .await
    }
}
