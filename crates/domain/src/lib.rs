//! # Devfolio Domain
//!
//! Business domain types and models for Devfolio.
//!
//! This crate contains:
//! - The profile aggregate, its social links and timeline entries
//! - Input records and the projected partial document (`ProfileFields`)
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Devfolio crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
