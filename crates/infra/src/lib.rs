//! # Devfolio Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite behind an r2d2 pool)
//! - HTTP client implementation
//! - External service integrations (GitHub)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `devfolio-core`
//! - Contains all "impure" code (I/O, network, filesystem)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use http::*;
pub use integrations::*;
