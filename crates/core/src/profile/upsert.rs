//! Upsert coordinator - create-or-merge for the profile aggregate

use std::sync::Arc;

use chrono::Utc;
use devfolio_domain::{IdentityId, Profile, ProfileFields, ProfileId, ProfileInput, Result};
use tracing::{debug, info};

use super::ports::ProfileRepository;
use super::projector::project;

/// Which branch an upsert took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Profile),
    Updated(Profile),
}

impl UpsertOutcome {
    pub fn profile(&self) -> &Profile {
        match self {
            Self::Created(profile) | Self::Updated(profile) => profile,
        }
    }

    pub fn into_profile(self) -> Profile {
        match self {
            Self::Created(profile) | Self::Updated(profile) => profile,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Decides between creating and merging a profile for an owner.
///
/// Input is expected to be validated by the caller; the coordinator applies
/// whatever fields are present. The merge is attempted first and reports
/// whether a profile existed, so a profile removed concurrently is simply
/// recreated. Two concurrent first writes for the same owner race between
/// merge and insert; the store's per-owner uniqueness makes the loser fail
/// instead of creating a duplicate.
pub struct UpsertCoordinator {
    profiles: Arc<dyn ProfileRepository>,
}

impl UpsertCoordinator {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Project `input` and upsert the result for `owner`.
    pub async fn upsert(&self, owner: IdentityId, input: &ProfileInput) -> Result<UpsertOutcome> {
        self.apply(project(owner, input)).await
    }

    /// Upsert an already projected document.
    pub async fn apply(&self, fields: ProfileFields) -> Result<UpsertOutcome> {
        let owner = fields.owner;
        debug!(%owner, fields = ?fields.field_names(), "upserting profile");

        let outcome = match self.profiles.update_fields(fields.clone()).await? {
            Some(merged) => UpsertOutcome::Updated(merged),
            None => {
                let profile = Profile::from_fields(ProfileId::new(), &fields, Utc::now());
                self.profiles.insert(profile.clone()).await?;
                UpsertOutcome::Created(profile)
            }
        };

        info!(
            %owner,
            profile_id = %outcome.profile().id,
            created = outcome.was_created(),
            "profile upserted"
        );
        Ok(outcome)
    }
}
