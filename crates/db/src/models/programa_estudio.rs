//! Study program entity model.

use sqlx::FromRow;
use sysasistencia_core::types::DbId;

use crate::models::facultad::Facultad;

/// A study program with its owning faculty resolved.
///
/// `id_programa` is `None` until the row has been inserted. The faculty is
/// a reference only; the program never owns its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramaEstudio {
    pub id_programa: Option<DbId>,
    pub nombre: String,
    pub facultad: Facultad,
    pub descripcion: Option<String>,
}

impl ProgramaEstudio {
    /// A program that has not been persisted yet.
    pub fn new(nombre: impl Into<String>, facultad: Facultad, descripcion: Option<String>) -> Self {
        Self {
            id_programa: None,
            nombre: nombre.into(),
            facultad,
            descripcion,
        }
    }

    /// Id of the referenced faculty, if that faculty has been persisted.
    pub fn facultad_id(&self) -> Option<DbId> {
        self.facultad.id_facultad
    }
}

/// Flat `programa_estudio JOIN facultad` row as read by the repository.
#[derive(Debug, Clone, FromRow)]
pub struct ProgramaEstudioRow {
    pub id_programa: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub facultad_id: DbId,
    pub facultad_nombre: String,
    pub facultad_descripcion: Option<String>,
}

impl From<ProgramaEstudioRow> for ProgramaEstudio {
    fn from(row: ProgramaEstudioRow) -> Self {
        Self {
            id_programa: Some(row.id_programa),
            nombre: row.nombre,
            facultad: Facultad {
                id_facultad: Some(row.facultad_id),
                nombre: row.facultad_nombre,
                descripcion: row.facultad_descripcion,
            },
            descripcion: row.descripcion,
        }
    }
}
