//! Health service implementation.

use crate::cache::CacheInterface;
use crate::health_service::{ComponentStatus, HealthReport, HealthService};
use async_trait::async_trait;
use cookbook_repository::RecipeRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::warn;

/// Health service component probing the repository and the cache.
#[derive(Component)]
#[shaku(interface = HealthService)]
pub struct HealthServiceComponent {
    #[shaku(inject)]
    repository: Arc<dyn RecipeRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl HealthServiceComponent {
    /// Creates a health service outside of a DI module.
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self { repository, cache }
    }

    async fn cache_status(&self) -> ComponentStatus {
        if !self.cache.is_enabled() {
            return ComponentStatus::Disabled;
        }
        match self.cache.ping().await {
            Ok(()) => ComponentStatus::Up,
            Err(e) => {
                warn!("Cache health check failed: {}", e);
                ComponentStatus::Down
            }
        }
    }
}

#[async_trait]
impl HealthService for HealthServiceComponent {
    async fn check(&self) -> HealthReport {
        let (repository, cache) = tokio::join!(self.repository.health_check(), self.cache_status());

        let repository = match repository {
            Ok(()) => ComponentStatus::Up,
            Err(e) => {
                warn!("Repository health check failed: {}", e);
                ComponentStatus::Down
            }
        };

        HealthReport { repository, cache }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RedisCacheService;
    use cookbook_core::{CookbookError, CookbookResult};
    use cookbook_repository::InMemoryRecipeRepository;
    use std::time::Duration;

    struct DownCache;

    #[async_trait]
    impl CacheInterface for DownCache {
        async fn get_raw(&self, _key: &str) -> CookbookResult<Option<String>> {
            Ok(None)
        }

        async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> CookbookResult<()> {
            Ok(())
        }

        async fn ping(&self) -> CookbookResult<()> {
            Err(CookbookError::Cache("connection reset".to_string()))
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_disabled_cache_is_reported_and_still_ready() {
        let service = HealthServiceComponent::new(
            Arc::new(InMemoryRecipeRepository::seeded()),
            Arc::new(RedisCacheService::disabled()),
        );

        let report = service.check().await;
        assert_eq!(report.repository, ComponentStatus::Up);
        assert_eq!(report.cache, ComponentStatus::Disabled);
        assert!(report.is_ready());
    }

    #[tokio::test]
    async fn test_down_cache_degrades_without_failing_readiness() {
        let service = HealthServiceComponent::new(
            Arc::new(InMemoryRecipeRepository::new()),
            Arc::new(DownCache),
        );

        let report = service.check().await;
        assert_eq!(report.cache, ComponentStatus::Down);
        assert!(report.is_ready());
    }

    #[test]
    fn test_report_serializes_lowercase() {
        let report = HealthReport {
            repository: ComponentStatus::Down,
            cache: ComponentStatus::Up,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "repository": "down", "cache": "up" })
        );
        assert!(!report.is_ready());
    }
}
