//! Mapping of SQLite, pool, JSON and HTTP transport failures onto
//! `DevfolioError`.
//!
//! Everything here surfaces as a transient or unexpected failure. Caller
//! facing outcomes (not found, upstream not found) are decided by the
//! repositories and the GitHub adapter, never by these conversions.

use devfolio_domain::DevfolioError;
use rusqlite::ffi::{self, ErrorCode};

/// Message for a duplicate key, e.g. a second profile for one owner.
pub const MSG_UNIQUE_VIOLATION: &str = "unique constraint violation";

/// Infrastructure-side wrapper so foreign error types can convert into the
/// domain error without the domain crate knowing about them.
#[derive(Debug)]
pub struct InfraError(pub DevfolioError);

impl From<InfraError> for DevfolioError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DevfolioError> for InfraError {
    fn from(value: DevfolioError) -> Self {
        InfraError(value)
    }
}

impl From<rusqlite::Error> for InfraError {
    fn from(err: rusqlite::Error) -> Self {
        let mapped = match err.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
                DevfolioError::Database(format!("profile store is busy: {err}"))
            }
            Some(ErrorCode::ConstraintViolation) if is_duplicate_key(&err) => {
                DevfolioError::Database(MSG_UNIQUE_VIOLATION.to_string())
            }
            _ => DevfolioError::Database(err.to_string()),
        };
        InfraError(mapped)
    }
}

fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    err.sqlite_error().is_some_and(|e| {
        matches!(e.extended_code, ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    })
}

impl From<r2d2::Error> for InfraError {
    fn from(err: r2d2::Error) -> Self {
        InfraError(DevfolioError::Database(format!("no database connection available: {err}")))
    }
}

/// Stored JSON columns and upstream payloads are both ours to trust, so a
/// parse failure is unexpected rather than bad input.
impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        InfraError(DevfolioError::Internal(format!("malformed JSON document: {err}")))
    }
}

/// The URL is stripped first because the GitHub query carries the client
/// secret.
impl From<reqwest::Error> for InfraError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mapped = if err.is_builder() {
            DevfolioError::Config(format!("invalid HTTP request: {err}"))
        } else if err.is_timeout() {
            DevfolioError::Network("upstream HTTP request timed out".into())
        } else if err.is_connect() {
            DevfolioError::Network("could not reach upstream HTTP server".into())
        } else if err.is_body() || err.is_decode() {
            DevfolioError::Network(format!("upstream HTTP body could not be read: {err}"))
        } else {
            DevfolioError::Network(err.to_string())
        };
        InfraError(mapped)
    }
}
