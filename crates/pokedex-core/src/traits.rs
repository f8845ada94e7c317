//! Core traits shared across layers.

use async_trait::async_trait;

/// Trait for health checks.
///
/// Implementations must not change the state of the component they probe.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Wire label used by the health endpoint.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy(_) => "unhealthy",
        }
    }

    /// Maps a boolean probe result to a status.
    #[must_use]
    pub fn from_probe(ok: bool, reason: &str) -> Self {
        if ok {
            Self::Healthy
        } else {
            Self::Unhealthy(reason.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_labels() {
        assert_eq!(HealthStatus::Healthy.as_str(), "healthy");
        assert_eq!(HealthStatus::Unhealthy("down".into()).as_str(), "unhealthy");
    }

    #[test]
    fn test_from_probe() {
        assert!(HealthStatus::from_probe(true, "unused").is_healthy());
        assert_eq!(
            HealthStatus::from_probe(false, "ping failed"),
            HealthStatus::Unhealthy("ping failed".to_string())
        );
    }
}
