//! Faculty entity model.

use serde::Serialize;
use sqlx::FromRow;
use sysasistencia_core::types::DbId;

/// A row from the `facultad` table.
///
/// `id_facultad` is `None` until the row has been inserted.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facultad {
    pub id_facultad: Option<DbId>,
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl Facultad {
    /// A faculty that has not been persisted yet.
    pub fn new(nombre: impl Into<String>, descripcion: Option<String>) -> Self {
        Self {
            id_facultad: None,
            nombre: nombre.into(),
            descripcion,
        }
    }
}
