//! Domain services.
//!
//! Services own the business rules (existence checks before update and
//! delete, `NotFound` signalling, the delete acknowledgement envelope) and
//! depend on repository traits, never on a concrete database.

pub mod facultad;
pub mod programa_estudio;

pub use facultad::FacultadService;
pub use programa_estudio::ProgramaEstudioService;
