use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::warn;

use crate::context::AppContext;
use crate::utils::health::HealthStatus;

pub(crate) async fn health(State(ctx): State<Arc<AppContext>>) -> (StatusCode, Json<HealthStatus>) {
    let status = ctx.health_check().await;
    if status.is_healthy() {
        (StatusCode::OK, Json(status))
    } else {
        warn!(components = ?status.components, "health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, Json(status))
    }
}
