use std::sync::Arc;

use sysasistencia_db::repositories::{
    FacultadRepository, PgFacultadRepo, PgProgramaEstudioRepo, ProgramaEstudioRepository,
};

use crate::config::ServerConfig;
use crate::services::{FacultadService, ProgramaEstudioService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the auth endpoints).
    pub pool: sysasistencia_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub programas: Arc<ProgramaEstudioService>,
    pub facultades: Arc<FacultadService>,
}

impl AppState {
    /// Wire the PostgreSQL repositories over `pool`.
    pub fn new(pool: sysasistencia_db::DbPool, config: ServerConfig) -> Self {
        let programas = Arc::new(PgProgramaEstudioRepo::new(pool.clone()));
        let facultades = Arc::new(PgFacultadRepo::new(pool.clone()));
        Self::with_repositories(pool, config, programas, facultades)
    }

    /// Build state over caller-supplied repositories.
    pub fn with_repositories(
        pool: sysasistencia_db::DbPool,
        config: ServerConfig,
        programas: Arc<dyn ProgramaEstudioRepository>,
        facultades: Arc<dyn FacultadRepository>,
    ) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            programas: Arc::new(ProgramaEstudioService::new(programas)),
            facultades: Arc::new(FacultadService::new(facultades)),
        }
    }
}
