//! Sparse partial profile document
//!
//! `ProfileFields` is the output of projecting a [`ProfileInput`] onto the
//! closed set of writable profile keys. `None` always means "not supplied":
//! it never clears a stored value.
//!
//! [`ProfileInput`]: super::input::ProfileInput

use serde::{Deserialize, Serialize};

use super::ids::IdentityId;

/// Optional values for each social link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialFields {
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Names of the links that are present.
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("youtube", &self.youtube),
            ("twitter", &self.twitter),
            ("facebook", &self.facebook),
            ("linkedin", &self.linkedin),
            ("instagram", &self.instagram),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|_| name))
        .collect()
    }
}

/// Partial profile document keyed by the profile's writable fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub owner: IdentityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub social: SocialFields,
}

impl ProfileFields {
    /// An empty document for `owner`; every field absent.
    pub fn for_owner(owner: IdentityId) -> Self {
        Self {
            owner,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: None,
            github_username: None,
            skills: None,
            social: SocialFields::default(),
        }
    }

    /// Names of the top-level fields that are present, social links
    /// reported as `social.<name>`.
    pub fn field_names(&self) -> Vec<String> {
        let scalars = [
            ("company", self.company.is_some()),
            ("website", self.website.is_some()),
            ("location", self.location.is_some()),
            ("bio", self.bio.is_some()),
            ("status", self.status.is_some()),
            ("githubUsername", self.github_username.is_some()),
            ("skills", self.skills.is_some()),
        ];

        scalars
            .into_iter()
            .filter(|(_, present)| *present)
            .map(|(name, _)| name.to_string())
            .chain(self.social.field_names().into_iter().map(|name| format!("social.{name}")))
            .collect()
    }
}
