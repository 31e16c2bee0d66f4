//! Operation execution helper
//!
//! Times a handler's service call and logs its outcome so that every route
//! reports the same fields.

use std::future::Future;
use std::time::Instant;

use devfolio_domain::Result as DomainResult;

use crate::utils::logging::log_operation_execution;

/// Run `operation_fn`, logging duration and success or failure under
/// `operation`.
///
/// # Example
///
/// ```rust,ignore
/// async fn list(State(ctx): State<Arc<AppContext>>) -> Result<Json<Vec<ProfileView>>, ApiError> {
///     let views = execute_logged("profile::list_all", || ctx.reader.list_all()).await?;
///     Ok(Json(views))
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(operation: &str, operation_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = operation_fn().await;

    log_operation_execution(operation, start.elapsed(), result.as_ref().err());
    result
}
