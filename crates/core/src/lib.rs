//! # Devfolio Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for profiles, identities and the
//!   external repository listing
//! - The profile components: field projector, upsert coordinator, timeline
//!   editor, reader and account removal
//! - The external repository lookup service
//!
//! ## Architecture Principles
//! - Only depends on `devfolio-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod lookup;
pub mod profile;

// Re-export specific items to avoid ambiguity
pub use lookup::ports::RepoListing;
pub use lookup::RepoLookupService;
pub use profile::ports::{IdentityRepository, ProfileRepository};
pub use profile::{
    project, AccountRemoval, AccountService, ProfileReader, TimelineEditor, UpsertCoordinator,
    UpsertOutcome,
};
