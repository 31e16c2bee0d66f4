//! Profile aggregate
//!
//! One document per owning identity. Scalars and social links are written
//! through [`ProfileFields`]; the timelines through prepend/remove only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::{ProfileFields, SocialFields};
use super::identity::IdentitySummary;
use super::ids::{IdentityId, ProfileId};
use super::timeline::{EducationEntry, ExperienceEntry, Timeline};

/// Social links; always present on a stored profile, possibly all empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl Social {
    /// Overwrite the links present in `fields`, keep the rest.
    pub fn apply(&mut self, fields: &SocialFields) {
        overwrite(&mut self.youtube, &fields.youtube);
        overwrite(&mut self.twitter, &fields.twitter);
        overwrite(&mut self.facebook, &fields.facebook);
        overwrite(&mut self.linkedin, &fields.linkedin);
        overwrite(&mut self.instagram, &fields.instagram);
    }
}

/// The profile aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub owner: IdentityId,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: Social,
    #[serde(default)]
    pub experience: Timeline<ExperienceEntry>,
    #[serde(default)]
    pub education: Timeline<EducationEntry>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Build a new profile whose writable fields are exactly `fields`.
    pub fn from_fields(id: ProfileId, fields: &ProfileFields, created_at: DateTime<Utc>) -> Self {
        let mut profile = Self {
            id,
            owner: fields.owner,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: None,
            github_username: None,
            skills: Vec::new(),
            social: Social::default(),
            experience: Timeline::default(),
            education: Timeline::default(),
            created_at,
        };
        profile.apply_fields(fields);
        profile
    }

    /// Merge `fields` into this profile.
    ///
    /// Present fields overwrite, absent fields keep their current value.
    /// Identity, owner, timelines and creation time are never touched.
    pub fn apply_fields(&mut self, fields: &ProfileFields) {
        overwrite(&mut self.company, &fields.company);
        overwrite(&mut self.website, &fields.website);
        overwrite(&mut self.location, &fields.location);
        overwrite(&mut self.bio, &fields.bio);
        overwrite(&mut self.status, &fields.status);
        overwrite(&mut self.github_username, &fields.github_username);
        if let Some(skills) = &fields.skills {
            self.skills.clone_from(skills);
        }
        self.social.apply(&fields.social);
    }
}

fn overwrite(slot: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *slot = Some(value.clone());
    }
}

/// Profile joined with the reduced view of its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    /// `None` when the owning identity no longer exists
    pub user: Option<IdentitySummary>,
}
