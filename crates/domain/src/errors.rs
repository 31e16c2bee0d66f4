//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::impl_label_conversions;

/// A single rejected input field, reported back to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (e.g. `fieldOfStudy`)
    pub param: String,
    pub msg: String,
}

impl FieldViolation {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { param: param.into(), msg: msg.into() }
    }
}

/// Main error type for Devfolio
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DevfolioError {
    #[error("Invalid input: {}", describe_violations(.0))]
    InvalidInput(Vec<FieldViolation>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream not found: {0}")]
    UpstreamNotFound(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used for logging and boundary mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationFailed,
    NotFound,
    NotFoundUpstream,
    Unauthenticated,
    TransientIo,
    Unexpected,
}

impl_label_conversions!(ErrorKind {
    ValidationFailed => "validation_failed",
    NotFound => "not_found",
    NotFoundUpstream => "not_found_upstream",
    Unauthenticated => "unauthenticated",
    TransientIo => "transient_io",
    Unexpected => "unexpected",
});

impl DevfolioError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::ValidationFailed,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UpstreamNotFound(_) => ErrorKind::NotFoundUpstream,
            Self::Auth(_) => ErrorKind::Unauthenticated,
            Self::Database(_) | Self::Network(_) => ErrorKind::TransientIo,
            Self::Config(_) | Self::Internal(_) => ErrorKind::Unexpected,
        }
    }

    /// Whether the message may be shown to the caller as-is.
    ///
    /// Transient and unexpected failures carry internal detail and must be
    /// replaced by an opaque message at the boundary.
    pub fn is_caller_facing(&self) -> bool {
        !matches!(self.kind(), ErrorKind::TransientIo | ErrorKind::Unexpected)
    }
}

fn describe_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(|v| v.msg.as_str()).collect::<Vec<_>>().join(", ")
}

/// Result type alias for Devfolio operations
pub type Result<T> = std::result::Result<T, DevfolioError>;
