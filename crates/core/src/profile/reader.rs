//! Profile reader - lookups joined with the owner's name and avatar

use std::sync::Arc;

use devfolio_domain::constants::{MSG_NO_PROFILE_FOR_USER, MSG_PROFILE_NOT_FOUND};
use devfolio_domain::{DevfolioError, IdentityId, Profile, ProfileView, Result};
use tracing::debug;

use super::ports::{IdentityRepository, ProfileRepository};

/// Read-only access to profiles
pub struct ProfileReader {
    profiles: Arc<dyn ProfileRepository>,
    identities: Arc<dyn IdentityRepository>,
}

impl ProfileReader {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        identities: Arc<dyn IdentityRepository>,
    ) -> Self {
        Self { profiles, identities }
    }

    /// The acting identity's own profile.
    pub async fn get_own(&self, owner: IdentityId) -> Result<ProfileView> {
        let profile = self
            .profiles
            .find_by_owner(owner)
            .await?
            .ok_or_else(|| DevfolioError::NotFound(MSG_NO_PROFILE_FOR_USER.to_string()))?;

        let mut views = self.join(vec![profile]).await?;
        views.pop().ok_or_else(|| DevfolioError::Internal("joined view went missing".into()))
    }

    /// Every profile, unpaginated.
    pub async fn list_all(&self) -> Result<Vec<ProfileView>> {
        let profiles = self.profiles.list_all().await?;
        debug!(count = profiles.len(), "listing profiles");
        self.join(profiles).await
    }

    /// Profiles owned by the identity named in `owner`, as seen by any caller.
    ///
    /// An owner without a profile yields an empty list. Text that is not an
    /// identity id is reported as not found.
    pub async fn get_by_owner(&self, owner: &str) -> Result<Vec<ProfileView>> {
        let owner = IdentityId::parse(owner)
            .ok_or_else(|| DevfolioError::NotFound(MSG_PROFILE_NOT_FOUND.to_string()))?;

        let profiles = self.profiles.find_by_owner(owner).await?.into_iter().collect();
        self.join(profiles).await
    }

    async fn join(&self, profiles: Vec<Profile>) -> Result<Vec<ProfileView>> {
        if profiles.is_empty() {
            return Ok(Vec::new());
        }

        let owners: Vec<IdentityId> = profiles.iter().map(|profile| profile.owner).collect();
        let mut summaries = self.identities.summaries(&owners).await?;

        Ok(profiles
            .into_iter()
            .map(|profile| {
                // Each owner has at most one profile, so the summary can be moved out.
                let user = summaries.remove(&profile.owner);
                ProfileView { profile, user }
            })
            .collect())
    }
}
