//! Authentication primitives for the `/users` endpoints and the bearer-token
//! extractor.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod jwt;
pub mod password;
