//! Application constants
//!
//! Centralized location for domain-level constants and caller-facing
//! messages.

// External repository lookup
pub const REPO_LOOKUP_PAGE_SIZE: u32 = 5;
pub const REPO_LOOKUP_SORT: &str = "created:asc";
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_USER_AGENT: &str = "devfolio";

// Skills are submitted as a single comma-delimited string
pub const SKILLS_DELIMITER: char = ',';

// Caller-facing messages
pub const MSG_NO_PROFILE_FOR_USER: &str = "There is no profile for this user";
pub const MSG_PROFILE_NOT_FOUND: &str = "Profile not found";
pub const MSG_NO_GITHUB_PROFILE: &str = "No GitHub profile found";
pub const MSG_USER_DELETED: &str = "User deleted";
pub const MSG_SERVER_ERROR: &str = "Server Error";
pub const MSG_NO_IDENTITY: &str = "No identity, authorization denied";
pub const MSG_INVALID_IDENTITY: &str = "Identity is not valid";
