//! Port interface for the external repository-listing service

use async_trait::async_trait;
use devfolio_domain::{RepoListingQuery, Result};

/// Trait for reading a user's public repositories from a third party
///
/// Implementations issue exactly one request per call and do not retry.
/// A non-success upstream status maps to `DevfolioError::UpstreamNotFound`;
/// a transport failure maps to `DevfolioError::Network`.
#[async_trait]
pub trait RepoListing: Send + Sync {
    /// Fetch the listing described by `query`, returning the upstream body
    /// unmodified
    async fn list_repositories(&self, query: &RepoListingQuery) -> Result<serde_json::Value>;
}
