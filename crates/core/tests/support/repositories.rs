//! In-memory repository implementations for testing
//!
//! Provides in-memory versions of the core ports, enabling deterministic
//! tests without database or network dependencies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use devfolio_core::{IdentityRepository, ProfileRepository, RepoListing};
use devfolio_domain::{
    DevfolioError, Identity, IdentityId, IdentitySummary, Profile, ProfileFields,
    RepoListingQuery, Result as DomainResult,
};

/// In-memory `ProfileRepository` keeping insertion order.
#[derive(Default, Clone)]
pub struct InMemoryProfileRepository {
    profiles: Arc<Mutex<Vec<Profile>>>,
    saves: Arc<Mutex<usize>>,
    vanish_on_merge: Arc<Mutex<bool>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an existing profile.
    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles.lock().unwrap().push(profile);
        self
    }

    /// Make the next `update_fields` call find its profile already deleted,
    /// as if another request removed it concurrently.
    pub fn vanishing_on_next_merge(self) -> Self {
        *self.vanish_on_merge.lock().unwrap() = true;
        self
    }

    /// Snapshot of everything stored.
    pub fn stored(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }

    /// Number of whole-profile writes through `save`.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_owner(&self, owner: IdentityId) -> DomainResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().iter().find(|p| p.owner == owner).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Profile>> {
        Ok(self.stored())
    }

    async fn insert(&self, profile: Profile) -> DomainResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.owner == profile.owner) {
            return Err(DevfolioError::Database("unique constraint violation".into()));
        }
        profiles.push(profile);
        Ok(())
    }

    async fn update_fields(&self, fields: ProfileFields) -> DomainResult<Option<Profile>> {
        let mut profiles = self.profiles.lock().unwrap();
        if std::mem::take(&mut *self.vanish_on_merge.lock().unwrap()) {
            profiles.retain(|p| p.owner != fields.owner);
        }
        Ok(profiles.iter_mut().find(|p| p.owner == fields.owner).map(|profile| {
            profile.apply_fields(&fields);
            profile.clone()
        }))
    }

    async fn save(&self, profile: Profile) -> DomainResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        let slot = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(|| DevfolioError::NotFound(format!("profile {}", profile.id)))?;
        *slot = profile;
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    async fn delete_by_owner(&self, owner: IdentityId) -> DomainResult<bool> {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.owner != owner);
        Ok(profiles.len() != before)
    }
}

/// In-memory `IdentityRepository`.
#[derive(Default, Clone)]
pub struct InMemoryIdentityRepository {
    identities: Arc<Mutex<HashMap<IdentityId, Identity>>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(self, identity: Identity) -> Self {
        self.identities.lock().unwrap().insert(identity.id, identity);
        self
    }

    pub fn contains(&self, id: IdentityId) -> bool {
        self.identities.lock().unwrap().contains_key(&id)
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, identity: Identity) -> DomainResult<()> {
        self.identities.lock().unwrap().insert(identity.id, identity);
        Ok(())
    }

    async fn get_by_id(&self, id: IdentityId) -> DomainResult<Option<Identity>> {
        Ok(self.identities.lock().unwrap().get(&id).cloned())
    }

    async fn summaries(
        &self,
        ids: &[IdentityId],
    ) -> DomainResult<HashMap<IdentityId, IdentitySummary>> {
        let identities = self.identities.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| identities.get(id).map(|identity| (*id, identity.summary())))
            .collect())
    }

    async fn delete(&self, id: IdentityId) -> DomainResult<bool> {
        Ok(self.identities.lock().unwrap().remove(&id).is_some())
    }
}

/// Scripted `RepoListing` that records every query it receives.
#[derive(Clone)]
pub struct StubRepoListing {
    response: DomainResult<serde_json::Value>,
    queries: Arc<Mutex<Vec<RepoListingQuery>>>,
}

impl StubRepoListing {
    pub fn returning(payload: serde_json::Value) -> Self {
        Self { response: Ok(payload), queries: Arc::default() }
    }

    pub fn failing(err: DevfolioError) -> Self {
        Self { response: Err(err), queries: Arc::default() }
    }

    pub fn queries(&self) -> Vec<RepoListingQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepoListing for StubRepoListing {
    async fn list_repositories(
        &self,
        query: &RepoListingQuery,
    ) -> DomainResult<serde_json::Value> {
        self.queries.lock().unwrap().push(query.clone());
        self.response.clone()
    }
}
