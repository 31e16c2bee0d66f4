//! Account removal - deletes a profile together with its owning identity

use std::sync::Arc;

use devfolio_domain::{IdentityId, Result};
use tracing::info;

use super::ports::{IdentityRepository, ProfileRepository};

/// What a removal actually deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRemoval {
    pub profile_removed: bool,
    pub identity_removed: bool,
}

/// Removes an owner's profile and account
pub struct AccountService {
    profiles: Arc<dyn ProfileRepository>,
    identities: Arc<dyn IdentityRepository>,
}

impl AccountService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        identities: Arc<dyn IdentityRepository>,
    ) -> Self {
        Self { profiles, identities }
    }

    /// Delete the profile first, then the identity. Missing rows are not an
    /// error.
    pub async fn delete_account(&self, owner: IdentityId) -> Result<AccountRemoval> {
        let profile_removed = self.profiles.delete_by_owner(owner).await?;
        let identity_removed = self.identities.delete(owner).await?;

        info!(%owner, profile_removed, identity_removed, "account deleted");
        Ok(AccountRemoval { profile_removed, identity_removed })
    }
}
