//! Configuration structures
//!
//! Loaded by `devfolio_infra::config` from the environment or a JSON/TOML
//! file. Every section has defaults so partial files are accepted.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GITHUB_API_BASE, DEFAULT_GITHUB_USER_AGENT};

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub github: GithubConfig,
}

/// SQLite database settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "devfolio.db".to_string(), pool_size: 8 }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 5000 }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Credentials and endpoint for the repository-listing service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    /// Bound on a whole lookup request; unbounded when absent.
    pub timeout_secs: Option<u64>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_GITHUB_API_BASE.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            user_agent: DEFAULT_GITHUB_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_base_url", &self.api_base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
