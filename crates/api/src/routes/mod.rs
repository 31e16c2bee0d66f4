//! HTTP routes
//!
//! Every handler extracts its inputs, calls one service operation through
//! [`execute_logged`](crate::utils::operation::execute_logged) and maps the
//! domain error into a response via [`ApiError`](crate::error::ApiError).

mod github;
mod health;
mod profile;
mod timeline;

use std::sync::Arc;

use axum::routing::{delete, get, put};
use axum::Router;

use crate::context::AppContext;

/// Build the application router over a shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/profile",
            get(profile::list_profiles)
                .post(profile::upsert_profile)
                .delete(profile::delete_account),
        )
        .route("/api/profile/me", get(profile::get_own_profile))
        .route("/api/profile/user/{user_id}", get(profile::get_profiles_by_owner))
        .route("/api/profile/experience", put(timeline::prepend_experience))
        .route("/api/profile/experience/{exp_id}", delete(timeline::remove_experience))
        .route("/api/profile/education", put(timeline::prepend_education))
        .route("/api/profile/education/{edu_id}", delete(timeline::remove_education))
        .route("/api/profile/github/{username}", get(github::lookup_repositories))
        .with_state(ctx)
}
