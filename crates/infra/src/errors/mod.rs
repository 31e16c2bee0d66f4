//! Infrastructure error conversions

pub mod conversions;

pub use conversions::{InfraError, MSG_UNIQUE_VIOLATION};
