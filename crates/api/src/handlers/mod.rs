//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers validate input, delegate to the domain services held in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod facultad;
pub mod programa_estudio;
pub mod user;
