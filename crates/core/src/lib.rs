//! Shared domain building blocks for the academic administration backend.
//!
//! Holds the types every other crate agrees on: identifier and timestamp
//! aliases, the domain error taxonomy, the operation result envelope and
//! input validation helpers. Nothing in here performs I/O.

pub mod error;
pub mod response;
pub mod types;
pub mod validation;
