//! Health report bodies.

use pokedex_core::HealthStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate health of the service and its dependencies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// `healthy` or `degraded`.
    pub status: String,
    pub services: ServicesHealth,
}

/// Per-dependency health.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServicesHealth {
    pub cache: CacheHealth,
    pub database: ComponentHealth,
    pub provider_file: ComponentHealth,
}

/// Cache health, reported but not counted towards overall status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CacheHealth {
    pub status: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
}

impl From<&HealthStatus> for ComponentHealth {
    fn from(status: &HealthStatus) -> Self {
        Self {
            status: status.as_str().to_string(),
        }
    }
}

impl HealthReport {
    /// Builds the report. Only the database and provider decide the
    /// overall status.
    #[must_use]
    pub fn new(
        cache: &HealthStatus,
        cache_enabled: bool,
        database: &HealthStatus,
        provider_file: &HealthStatus,
    ) -> Self {
        let status = if database.is_healthy() && provider_file.is_healthy() {
            "healthy"
        } else {
            "degraded"
        };

        Self {
            status: status.to_string(),
            services: ServicesHealth {
                cache: CacheHealth {
                    status: cache.as_str().to_string(),
                    enabled: cache_enabled,
                },
                database: database.into(),
                provider_file: provider_file.into(),
            },
        }
    }

    /// Returns true when every authoritative dependency is up.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_does_not_affect_overall_status() {
        let down = HealthStatus::Unhealthy("down".into());
        let report = HealthReport::new(&down, false, &HealthStatus::Healthy, &HealthStatus::Healthy);

        assert!(report.is_healthy());
        assert_eq!(report.services.cache.status, "unhealthy");
        assert!(!report.services.cache.enabled);
    }

    #[test]
    fn test_database_down_is_degraded() {
        let down = HealthStatus::Unhealthy("down".into());
        let report = HealthReport::new(&HealthStatus::Healthy, true, &down, &HealthStatus::Healthy);

        assert!(!report.is_healthy());
        assert_eq!(report.status, "degraded");
        assert_eq!(report.services.database.status, "unhealthy");
    }

    #[test]
    fn test_serialized_shape() {
        let report = HealthReport::new(
            &HealthStatus::Healthy,
            true,
            &HealthStatus::Healthy,
            &HealthStatus::Healthy,
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["services"]["cache"]["enabled"], true);
        assert_eq!(json["services"]["provider_file"]["status"], "healthy");
    }
}
