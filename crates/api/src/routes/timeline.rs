use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use devfolio_domain::{EducationInput, ExperienceInput, Profile};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::{ActingIdentity, FormBody};
use crate::utils::operation::execute_logged;

pub(crate) async fn prepend_experience(
    State(ctx): State<Arc<AppContext>>,
    ActingIdentity(owner): ActingIdentity,
    FormBody(input): FormBody<ExperienceInput>,
) -> Result<Json<Profile>, ApiError> {
    let profile = execute_logged("timeline::prepend_experience", move || async move {
        let draft = input.validate()?;
        ctx.timeline.prepend_experience(owner, draft).await
    })
    .await?;
    Ok(Json(profile))
}

pub(crate) async fn prepend_education(
    State(ctx): State<Arc<AppContext>>,
    ActingIdentity(owner): ActingIdentity,
    FormBody(input): FormBody<EducationInput>,
) -> Result<Json<Profile>, ApiError> {
    let profile = execute_logged("timeline::prepend_education", move || async move {
        let draft = input.validate()?;
        ctx.timeline.prepend_education(owner, draft).await
    })
    .await?;
    Ok(Json(profile))
}

pub(crate) async fn remove_experience(
    State(ctx): State<Arc<AppContext>>,
    ActingIdentity(owner): ActingIdentity,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = execute_logged("timeline::remove_experience", || {
        ctx.timeline.remove_experience(owner, &exp_id)
    })
    .await?;
    Ok(Json(profile))
}

pub(crate) async fn remove_education(
    State(ctx): State<Arc<AppContext>>,
    ActingIdentity(owner): ActingIdentity,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = execute_logged("timeline::remove_education", || {
        ctx.timeline.remove_education(owner, &edu_id)
    })
    .await?;
    Ok(Json(profile))
}
