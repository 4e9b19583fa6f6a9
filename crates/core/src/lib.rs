//! Framework-independent building blocks of the JSON API response envelope.
//!
//! The HTTP integration (status propagation, axum responses) lives in the
//! `envelope-api` crate; this crate only knows about the wire shape.

pub mod envelope;
pub mod error;
pub mod pagination;
pub mod schema;
pub mod types;
