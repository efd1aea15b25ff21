//! Conversions between wire DTOs and storage models.

pub mod programa_estudio;
