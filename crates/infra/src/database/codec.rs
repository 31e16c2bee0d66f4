//! Column encoding shared by the SQLite repositories

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use devfolio_domain::{DevfolioError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::InfraError;

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| DevfolioError::Database(format!("invalid stored timestamp '{raw}': {err}")))
}

pub(crate) fn parse_id<T>(raw: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|err| DevfolioError::Database(format!("invalid stored {what} '{raw}': {err}")))
}

pub(crate) fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|err| DevfolioError::from(InfraError::from(err)))
}

pub(crate) fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|err| DevfolioError::from(InfraError::from(err)))
}
