//! Request extractors
//!
//! Authentication happens upstream of this service. The gateway forwards the
//! authenticated account id in the `x-user-id` header.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use devfolio_domain::constants::{MSG_INVALID_IDENTITY, MSG_NO_IDENTITY};
use devfolio_domain::{DevfolioError, FieldViolation, IdentityId};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Header carrying the authenticated account id.
pub const IDENTITY_HEADER: &str = "x-user-id";

/// The identity on whose behalf a request acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingIdentity(pub IdentityId);

impl<S> FromRequestParts<S> for ActingIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(IDENTITY_HEADER)
            .ok_or_else(|| DevfolioError::Auth(MSG_NO_IDENTITY.to_string()))?;

        value
            .to_str()
            .ok()
            .and_then(|raw| IdentityId::parse(raw.trim()))
            .map(Self)
            .ok_or_else(|| DevfolioError::Auth(MSG_INVALID_IDENTITY.to_string()).into())
    }
}

/// JSON form body where every field is optional.
///
/// An empty body reads as the all-absent form so that validation reports the
/// missing fields. A body that is not a JSON object is rejected against
/// `body`; an object whose field has the wrong type is rejected against that
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBody<T>(pub T);

impl<S, T> FromRequest<S> for FormBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|_| malformed_body())?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(&bytes) else {
            return Err(malformed_body());
        };
        match serde_json::from_value(Value::Object(fields.clone())) {
            Ok(form) => Ok(Self(form)),
            Err(_) => Err(invalid_field::<T>(fields)),
        }
    }
}

/// Every form field is optional, so the offending field is the one that
/// fails to deserialize on its own.
fn invalid_field<T: DeserializeOwned>(fields: Map<String, Value>) -> ApiError {
    let offending = fields.into_iter().find(|(name, value)| {
        let single = Map::from_iter([(name.clone(), value.clone())]);
        serde_json::from_value::<T>(Value::Object(single)).is_err()
    });
    match offending {
        Some((name, _)) => {
            let msg = format!("Invalid value for {name}");
            DevfolioError::InvalidInput(vec![FieldViolation::new(name, msg)]).into()
        }
        None => malformed_body(),
    }
}

fn malformed_body() -> ApiError {
    DevfolioError::InvalidInput(vec![FieldViolation::new("body", "Body must be a JSON object")])
        .into()
}
