//! External repository lookup service - core business logic

use std::sync::Arc;

use devfolio_domain::{RepoListingQuery, Result};
use tracing::{info, warn};

use super::ports::RepoListing;

/// Pass-through lookup of a user's repositories
pub struct RepoLookupService {
    listing: Arc<dyn RepoListing>,
}

impl RepoLookupService {
    pub fn new(listing: Arc<dyn RepoListing>) -> Self {
        Self { listing }
    }

    /// First page (five repositories, oldest first) for `username`.
    ///
    /// The upstream payload is returned as-is.
    pub async fn lookup(&self, username: &str) -> Result<serde_json::Value> {
        let query = RepoListingQuery::for_user(username);

        match self.listing.list_repositories(&query).await {
            Ok(payload) => {
                let count = payload.as_array().map(Vec::len);
                info!(username, ?count, "repository listing fetched");
                Ok(payload)
            }
            Err(err) => {
                warn!(username, kind = %err.kind(), error = %err, "repository listing failed");
                Err(err)
            }
        }
    }
}
