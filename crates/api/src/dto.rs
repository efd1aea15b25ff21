//! Wire-facing representations of the managed entities.
//!
//! These are the JSON shapes clients send and receive. They are flat and
//! camelCased; conversion to and from the storage models lives in
//! [`crate::mappers`].

use serde::{Deserialize, Serialize};
use sysasistencia_core::types::DbId;
use validator::Validate;

/// Study program as exchanged over HTTP.
///
/// `facultad_nombre` is derived on the way out and ignored on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProgramaEstudioDto {
    #[serde(default)]
    pub id_programa: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    pub facultad_id: DbId,
    #[serde(default)]
    pub facultad_nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Inbound faculty payload for create and update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FacultadDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn programa_dto_uses_camel_case() {
        let dto = ProgramaEstudioDto {
            id_programa: Some(1),
            nombre: "Ingeniería de Sistemas".into(),
            facultad_id: 1,
            facultad_nombre: Some("Facultad de Ingeniería".into()),
            descripcion: None,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["idPrograma"], 1);
        assert_eq!(json["facultadId"], 1);
        assert_eq!(json["facultadNombre"], "Facultad de Ingeniería");
    }

    #[test]
    fn programa_dto_accepts_payload_without_id() {
        let dto: ProgramaEstudioDto = serde_json::from_value(serde_json::json!({
            "nombre": "Ingeniería Mecánica",
            "facultadId": 1,
            "descripcion": "Programa de ingeniería mecánica"
        }))
        .unwrap();

        assert_eq!(dto.id_programa, None);
        assert_eq!(dto.facultad_nombre, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn programa_dto_requires_facultad_id() {
        let result = serde_json::from_value::<ProgramaEstudioDto>(serde_json::json!({
            "nombre": "Sin facultad"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_nombre_fails_validation() {
        let dto = FacultadDto {
            nombre: String::new(),
            descripcion: None,
        };
        assert!(dto.validate().is_err());
    }
}
