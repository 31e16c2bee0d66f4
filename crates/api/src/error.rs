//! Mapping from domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use devfolio_domain::constants::MSG_SERVER_ERROR;
use devfolio_domain::{DevfolioError, FieldViolation};
use serde::Serialize;
use tracing::error;

/// Error returned by every handler.
#[derive(Debug)]
pub struct ApiError(pub DevfolioError);

impl From<DevfolioError> for ApiError {
    fn from(err: DevfolioError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct MessageBody {
    msg: String,
}

#[derive(Serialize)]
struct ViolationsBody {
    errors: Vec<FieldViolation>,
}

/// Caller-facing failures carry their message; everything else becomes an
/// opaque 500 and is logged here.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DevfolioError::InvalidInput(errors) => {
                (StatusCode::BAD_REQUEST, Json(ViolationsBody { errors })).into_response()
            }
            DevfolioError::NotFound(msg) => message(StatusCode::BAD_REQUEST, msg),
            DevfolioError::UpstreamNotFound(msg) => message(StatusCode::NOT_FOUND, msg),
            DevfolioError::Auth(msg) => message(StatusCode::UNAUTHORIZED, msg),
            other => {
                error!(kind = %other.kind(), error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR).into_response()
            }
        }
    }
}

fn message(status: StatusCode, msg: String) -> Response {
    (status, Json(MessageBody { msg })).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    use super::*;

    async fn render(err: DevfolioError) -> (StatusCode, Vec<u8>) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), 10_000).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn validation_lists_every_violation() {
        let (status, body) = render(DevfolioError::InvalidInput(vec![
            FieldViolation::new("status", "Status is required"),
            FieldViolation::new("skills", "Skills is required"),
        ]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({"errors": [
                {"param": "status", "msg": "Status is required"},
                {"param": "skills", "msg": "Skills is required"}
            ]})
        );
    }

    #[tokio::test]
    async fn caller_facing_errors_keep_their_message() {
        let (status, body) = render(DevfolioError::NotFound("Profile not found".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({"msg": "Profile not found"}));

        let (status, _) = render(DevfolioError::UpstreamNotFound("gone".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = render(DevfolioError::Auth("denied".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn internal_detail_is_hidden() {
        for err in [
            DevfolioError::Database("disk I/O error at /var/lib/devfolio.db".into()),
            DevfolioError::Network("connection reset".into()),
            DevfolioError::Internal("join error".into()),
            DevfolioError::Config("bad base url".into()),
        ] {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, MSG_SERVER_ERROR.as_bytes());
        }
    }
}
