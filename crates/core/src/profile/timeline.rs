//! Timeline collection editor
//!
//! Prepend and remove operations on the `experience` and `education`
//! collections of an existing profile. Each edit loads the whole profile,
//! changes one collection and writes the profile back; concurrent edits on
//! the same profile are last-writer-wins.

use std::sync::Arc;

use devfolio_domain::constants::MSG_NO_PROFILE_FOR_USER;
use devfolio_domain::{
    DevfolioError, EducationDraft, EntryId, ExperienceDraft, IdentityId, Profile, Result,
    TimelineKind,
};
use tracing::{debug, info};

use super::ports::ProfileRepository;

/// Edits the ordered sub-collections of a profile
pub struct TimelineEditor {
    profiles: Arc<dyn ProfileRepository>,
}

impl TimelineEditor {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Add an experience entry in front of the existing ones.
    pub async fn prepend_experience(
        &self,
        owner: IdentityId,
        draft: ExperienceDraft,
    ) -> Result<Profile> {
        let id = EntryId::new();
        self.edit(owner, TimelineKind::Experience, |profile| {
            profile.experience.prepend(draft.into_entry(id));
        })
        .await
        .inspect(|_| info!(%owner, entry_id = %id, "experience entry added"))
    }

    /// Add an education entry in front of the existing ones.
    pub async fn prepend_education(
        &self,
        owner: IdentityId,
        draft: EducationDraft,
    ) -> Result<Profile> {
        let id = EntryId::new();
        self.edit(owner, TimelineKind::Education, |profile| {
            profile.education.prepend(draft.into_entry(id));
        })
        .await
        .inspect(|_| info!(%owner, entry_id = %id, "education entry added"))
    }

    /// Remove the experience entry identified by `entry_id`.
    ///
    /// An identifier that matches nothing (or is not an identifier at all)
    /// leaves the collection unchanged.
    pub async fn remove_experience(&self, owner: IdentityId, entry_id: &str) -> Result<Profile> {
        let target = EntryId::parse(entry_id);
        self.edit(owner, TimelineKind::Experience, |profile| {
            let removed = target.and_then(|id| profile.experience.remove_by_id(id)).is_some();
            log_removal(owner, TimelineKind::Experience, entry_id, removed);
        })
        .await
    }

    /// Remove the education entry identified by `entry_id`.
    ///
    /// Same no-op rule as [`Self::remove_experience`].
    pub async fn remove_education(&self, owner: IdentityId, entry_id: &str) -> Result<Profile> {
        let target = EntryId::parse(entry_id);
        self.edit(owner, TimelineKind::Education, |profile| {
            let removed = target.and_then(|id| profile.education.remove_by_id(id)).is_some();
            log_removal(owner, TimelineKind::Education, entry_id, removed);
        })
        .await
    }

    async fn edit<F>(&self, owner: IdentityId, kind: TimelineKind, change: F) -> Result<Profile>
    where
        F: FnOnce(&mut Profile) + Send,
    {
        let mut profile = self
            .profiles
            .find_by_owner(owner)
            .await?
            .ok_or_else(|| DevfolioError::NotFound(MSG_NO_PROFILE_FOR_USER.to_string()))?;

        change(&mut profile);

        self.profiles.save(profile.clone()).await?;
        debug!(
            %owner,
            timeline = %kind,
            experience = profile.experience.len(),
            education = profile.education.len(),
            "timeline saved"
        );
        Ok(profile)
    }
}

fn log_removal(owner: IdentityId, kind: TimelineKind, entry_id: &str, removed: bool) {
    if removed {
        info!(%owner, timeline = %kind, entry_id, "timeline entry removed");
    } else {
        debug!(%owner, timeline = %kind, entry_id, "no timeline entry matched; nothing removed");
    }
}
