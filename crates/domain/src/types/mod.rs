//! Domain types and models
//!
//! The profile aggregate and everything that flows into or out of it.

pub mod fields;
pub mod identity;
pub mod ids;
pub mod input;
pub mod lookup;
pub mod profile;
pub mod timeline;

pub use fields::{ProfileFields, SocialFields};
pub use identity::{Identity, IdentitySummary};
pub use ids::{EntryId, IdentityId, ProfileId};
pub use input::{
    EducationDraft, EducationInput, ExperienceDraft, ExperienceInput, ProfileInput,
};
pub use lookup::RepoListingQuery;
pub use profile::{Profile, ProfileView, Social};
pub use timeline::{EducationEntry, ExperienceEntry, Timeline, TimelineEntry, TimelineKind};
