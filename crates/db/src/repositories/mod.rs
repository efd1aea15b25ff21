//! Repository layer.
//!
//! Faculties and study programs sit behind async traits so the domain
//! services can depend on `Arc<dyn ...>` and be exercised against mocks.
//! The PostgreSQL implementations own a cloned pool handle.
//!
//! Users keep the zero-sized style: async methods taking `&PgPool` first.

pub mod facultad_repo;
pub mod programa_estudio_repo;
pub mod user_repo;

pub use facultad_repo::{FacultadRepository, PgFacultadRepo};
pub use programa_estudio_repo::{PgProgramaEstudioRepo, ProgramaEstudioRepository};
pub use user_repo::UserRepo;
