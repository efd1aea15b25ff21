//! Academic administration API server library.
//!
//! Exposes the building blocks (config, state, error handling, services,
//! mappers, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mappers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
