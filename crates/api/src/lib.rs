//! Envelope API server library.
//!
//! Exposes the response envelope, error handling, configuration and routes
//! so integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
