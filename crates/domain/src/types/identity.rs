//! Identity types
//!
//! Accounts are owned by the external account system; Devfolio keeps the rows
//! it needs to join profile reads against and to delete an account together
//! with its profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IdentityId;

/// Account record as stored alongside profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Reduced projection used when joining profile reads.
    pub fn summary(&self) -> IdentitySummary {
        IdentitySummary { id: self.id, name: self.name.clone(), avatar: self.avatar.clone() }
    }
}

/// Name and avatar of a profile's owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySummary {
    pub id: IdentityId,
    pub name: String,
    pub avatar: Option<String>,
}
