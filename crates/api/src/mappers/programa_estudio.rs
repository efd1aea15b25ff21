//! Study program DTO <-> entity mapping.
//!
//! Outbound, the nested faculty is flattened into `facultadId` and
//! `facultadNombre`. Inbound, the caller resolves `facultadId` to a stored
//! faculty first and hands it in; this module never touches storage.

use sysasistencia_db::models::facultad::Facultad;
use sysasistencia_db::models::programa_estudio::ProgramaEstudio;

use crate::dto::ProgramaEstudioDto;

/// Flatten a stored program into its wire shape.
///
/// A faculty without an id (never persisted) maps to `facultadId = 0`.
pub fn to_dto(programa: &ProgramaEstudio) -> ProgramaEstudioDto {
    ProgramaEstudioDto {
        id_programa: programa.id_programa,
        nombre: programa.nombre.clone(),
        facultad_id: programa.facultad_id().unwrap_or_default(),
        facultad_nombre: Some(programa.facultad.nombre.clone()),
        descripcion: programa.descripcion.clone(),
    }
}

/// Element-wise [`to_dto`], preserving order.
pub fn to_dtos(programas: &[ProgramaEstudio]) -> Vec<ProgramaEstudioDto> {
    programas.iter().map(to_dto).collect()
}

/// Build the storage model from an inbound DTO and its resolved faculty.
///
/// `idPrograma` is carried through; `facultadNombre` is ignored.
pub fn to_entity(dto: ProgramaEstudioDto, facultad: Facultad) -> ProgramaEstudio {
    ProgramaEstudio {
        id_programa: dto.id_programa,
        nombre: dto.nombre,
        facultad,
        descripcion: dto.descripcion,
    }
}
