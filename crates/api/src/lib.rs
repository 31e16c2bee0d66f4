//! # Devfolio API
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - axum routes for the profile, timeline and repository lookup operations
//! - Application context (dependency injection)
//! - Error-to-response mapping and request extractors
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Translates domain errors into HTTP status codes at the boundary

pub mod context;
pub mod error;
pub mod extract;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use error::ApiError;
pub use extract::{ActingIdentity, FormBody, IDENTITY_HEADER};
pub use routes::router;
pub use utils::logging::init_tracing;
