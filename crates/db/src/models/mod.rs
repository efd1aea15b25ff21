//! Storage models.
//!
//! Each submodule contains the `FromRow` struct(s) matching the database
//! row and, where the stored shape differs from the in-memory one, the
//! explicit conversion between them.

pub mod facultad;
pub mod programa_estudio;
pub mod user;
