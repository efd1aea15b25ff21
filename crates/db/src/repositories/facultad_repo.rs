//! Repository for the `facultad` table.

use async_trait::async_trait;
use sqlx::PgPool;
use sysasistencia_core::types::DbId;

use crate::models::facultad::Facultad;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_facultad, nombre, descripcion";

/// Storage operations on faculties.
#[async_trait]
pub trait FacultadRepository: Send + Sync {
    /// All faculties ordered by id ascending.
    async fn find_all(&self) -> Result<Vec<Facultad>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Facultad>, sqlx::Error>;

    async fn find_by_nombre(&self, nombre: &str) -> Result<Option<Facultad>, sqlx::Error>;

    /// Insert when `id_facultad` is `None`, otherwise update that row.
    async fn save(&self, facultad: &Facultad) -> Result<Facultad, sqlx::Error>;

    /// Delete by id. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while programs still reference the faculty.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// PostgreSQL-backed [`FacultadRepository`].
#[derive(Clone)]
pub struct PgFacultadRepo {
    pool: PgPool,
}

impl PgFacultadRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FacultadRepository for PgFacultadRepo {
    async fn find_all(&self) -> Result<Vec<Facultad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facultad ORDER BY id_facultad ASC");
        sqlx::query_as::<_, Facultad>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Facultad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facultad WHERE id_facultad = $1");
        sqlx::query_as::<_, Facultad>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_nombre(&self, nombre: &str) -> Result<Option<Facultad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facultad WHERE nombre = $1");
        sqlx::query_as::<_, Facultad>(&query)
            .bind(nombre)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, facultad: &Facultad) -> Result<Facultad, sqlx::Error> {
        match facultad.id_facultad {
            Some(id) => {
                let query = format!(
                    "UPDATE facultad SET
                        nombre = $2,
                        descripcion = $3,
                        updated_at = NOW()
                     WHERE id_facultad = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Facultad>(&query)
                    .bind(id)
                    .bind(&facultad.nombre)
                    .bind(&facultad.descripcion)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                let query = format!(
                    "INSERT INTO facultad (nombre, descripcion)
                     VALUES ($1, $2)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Facultad>(&query)
                    .bind(&facultad.nombre)
                    .bind(&facultad.descripcion)
                    .fetch_one(&self.pool)
                    .await
            }
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM facultad WHERE id_facultad = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
