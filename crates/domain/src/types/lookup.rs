//! Parameters for the external repository listing

use serde::{Deserialize, Serialize};

use crate::constants::{REPO_LOOKUP_PAGE_SIZE, REPO_LOOKUP_SORT};

/// One read against the repository-listing service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoListingQuery {
    /// Free-text account name, passed through as given
    pub username: String,
    pub per_page: u32,
    pub sort: String,
}

impl RepoListingQuery {
    /// Newest-last listing of the first page for `username`.
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            per_page: REPO_LOOKUP_PAGE_SIZE,
            sort: REPO_LOOKUP_SORT.to_string(),
        }
    }
}
