//! Port interfaces for profile management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for profile and identity storage.

use std::collections::HashMap;

use async_trait::async_trait;
use devfolio_domain::{Identity, IdentityId, IdentitySummary, Profile, ProfileFields, Result};

/// Trait for profile persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get the profile owned by `owner`
    async fn find_by_owner(&self, owner: IdentityId) -> Result<Option<Profile>>;

    /// Get every stored profile, oldest first
    async fn list_all(&self) -> Result<Vec<Profile>>;

    /// Store a new profile
    ///
    /// Implementations must reject a second profile for the same owner.
    async fn insert(&self, profile: Profile) -> Result<()>;

    /// Merge `fields` into the profile of `fields.owner` as a single step
    ///
    /// Returns the merged profile, or `None` when the owner has no profile.
    async fn update_fields(&self, fields: ProfileFields) -> Result<Option<Profile>>;

    /// Replace the stored profile with `profile` (matched by id)
    async fn save(&self, profile: Profile) -> Result<()>;

    /// Delete the profile owned by `owner`, returning whether one existed
    async fn delete_by_owner(&self, owner: IdentityId) -> Result<bool>;
}

/// Trait for the identity rows profiles are joined against
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Store a new identity
    async fn create(&self, identity: Identity) -> Result<()>;

    /// Get an identity by id
    async fn get_by_id(&self, id: IdentityId) -> Result<Option<Identity>>;

    /// Reduced views for every id in `ids` that exists
    async fn summaries(&self, ids: &[IdentityId])
        -> Result<HashMap<IdentityId, IdentitySummary>>;

    /// Delete an identity, returning whether one existed
    async fn delete(&self, id: IdentityId) -> Result<bool>;
}
