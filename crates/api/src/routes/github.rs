use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::operation::execute_logged;

/// Upstream payload is passed through unmodified.
pub(crate) async fn lookup_repositories(
    State(ctx): State<Arc<AppContext>>,
    Path(username): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let payload =
        execute_logged("github::lookup", || ctx.repo_lookup.lookup(&username)).await?;
    Ok(Json(payload))
}
