//! Field projector
//!
//! Turns a [`ProfileInput`] into the sparse [`ProfileFields`] document used
//! by both the create and the merge path. Empty inputs are treated as not
//! supplied.

use devfolio_domain::constants::SKILLS_DELIMITER;
use devfolio_domain::{IdentityId, ProfileFields, ProfileInput, SocialFields};

/// Project `input` onto the writable profile fields for `owner`.
pub fn project(owner: IdentityId, input: &ProfileInput) -> ProfileFields {
    let skills = input.skills.as_deref().map(parse_skills).filter(|skills| !skills.is_empty());

    ProfileFields {
        owner,
        company: supplied(input.company.as_deref()),
        website: supplied(input.website.as_deref()),
        location: supplied(input.location.as_deref()),
        bio: supplied(input.bio.as_deref()),
        status: supplied(input.status.as_deref()),
        github_username: supplied(input.github_username.as_deref()),
        skills,
        social: SocialFields {
            youtube: supplied(input.youtube.as_deref()),
            twitter: supplied(input.twitter.as_deref()),
            facebook: supplied(input.facebook.as_deref()),
            linkedin: supplied(input.linkedin.as_deref()),
            instagram: supplied(input.instagram.as_deref()),
        },
    }
}

/// Split a comma-delimited skills string into trimmed, non-empty skills.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(SKILLS_DELIMITER)
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

fn supplied(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
