//! Health check types for AppContext components

use serde::{Deserialize, Serialize};

/// Overall health of the service
///
/// ```
/// use devfolio_api::utils::health::{ComponentHealth, HealthStatus};
///
/// let status = HealthStatus::from_components(vec![
///     ComponentHealth::healthy("database"),
///     ComponentHealth::unhealthy("cache", "connection timeout"),
/// ]);
///
/// assert_eq!(status.status, "degraded");
/// assert!(!status.is_healthy());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when every component is healthy, otherwise `"degraded"`
    pub status: String,

    /// Individual component health checks
    pub components: Vec<ComponentHealth>,
}

impl HealthStatus {
    pub fn from_components(components: Vec<ComponentHealth>) -> Self {
        let healthy = components.iter().all(|c| c.is_healthy);
        Self { status: if healthy { "ok" } else { "degraded" }.to_string(), components }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "ok"
    }
}

/// Health of a single component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub is_healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}
