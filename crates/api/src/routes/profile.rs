use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use devfolio_domain::constants::MSG_USER_DELETED;
use devfolio_domain::{Profile, ProfileInput, ProfileView};
use serde::Serialize;
use tracing::debug;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::{ActingIdentity, FormBody};
use crate::utils::operation::execute_logged;

#[derive(Debug, Serialize)]
pub(crate) struct DeletedBody {
    msg: &'static str,
}

pub(crate) async fn get_own_profile(
    State(ctx): State<Arc<AppContext>>,
    ActingIdentity(owner): ActingIdentity,
) -> Result<Json<ProfileView>, ApiError> {
    let view = execute_logged("profile::get_own", || ctx.reader.get_own(owner)).await?;
    Ok(Json(view))
}

pub(crate) async fn list_profiles(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let views = execute_logged("profile::list_all", || ctx.reader.list_all()).await?;
    Ok(Json(views))
}

pub(crate) async fn get_profiles_by_owner(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let views =
        execute_logged("profile::get_by_owner", || ctx.reader.get_by_owner(&user_id)).await?;
    Ok(Json(views))
}

pub(crate) async fn upsert_profile(
    State(ctx): State<Arc<AppContext>>,
    ActingIdentity(owner): ActingIdentity,
    FormBody(input): FormBody<ProfileInput>,
) -> Result<Json<Profile>, ApiError> {
    let outcome = execute_logged("profile::upsert", move || async move {
        input.validate()?;
        ctx.upsert.upsert(owner, &input).await
    })
    .await?;

    debug!(%owner, created = outcome.was_created(), "profile upserted");
    Ok(Json(outcome.into_profile()))
}

pub(crate) async fn delete_account(
    State(ctx): State<Arc<AppContext>>,
    ActingIdentity(owner): ActingIdentity,
) -> Result<Json<DeletedBody>, ApiError> {
    execute_logged("profile::delete_account", || ctx.accounts.delete_account(owner)).await?;
    Ok(Json(DeletedBody { msg: MSG_USER_DELETED }))
}
