//! Catalog service implementation.

use crate::cache::CatalogCache;
use crate::catalog_service::CatalogService;
use crate::dto::{
    CaptureRequest, CapturedResponse, HealthReport, PokemonListResponse, TypesResponse,
};
use async_trait::async_trait;
use pokedex_core::{CatalogQuery, HealthCheck, HealthStatus, PokedexError, PokedexResult, Pokemon};
use pokedex_repository::{CapturedRepository, CatalogProvider};
use std::sync::Arc;
use tracing::{debug, info};

/// Catalog service backed by the cache-aside manager.
pub struct CatalogServiceImpl {
    cache: Arc<CatalogCache>,
    provider: Arc<dyn CatalogProvider>,
    captured: Arc<dyn CapturedRepository>,
    database: Arc<dyn HealthCheck>,
}

impl CatalogServiceImpl {
    /// Creates a new catalog service.
    pub fn new(
        cache: Arc<CatalogCache>,
        provider: Arc<dyn CatalogProvider>,
        captured: Arc<dyn CapturedRepository>,
        database: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            cache,
            provider,
            captured,
            database,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_pokemon(&self, query: CatalogQuery) -> PokedexResult<PokemonListResponse> {
        debug!(
            page = query.page,
            page_size = query.page_size,
            sort = %query.sort,
            category = ?query.category,
            search = ?query.search,
            "Listing pokemon"
        );

        let records = self.cache.get_catalog().await?;
        Ok(query.apply(records).into())
    }

    async fn list_types(&self) -> PokedexResult<TypesResponse> {
        let types = self.cache.get_categories().await?;
        Ok(TypesResponse { types })
    }

    async fn list_captured(&self) -> PokedexResult<CapturedResponse> {
        let captured = self.captured.list_captured_names().await?;
        Ok(CapturedResponse { captured })
    }

    async fn set_captured(&self, request: CaptureRequest) -> PokedexResult<()> {
        let name = request
            .name()
            .ok_or_else(|| PokedexError::validation("Pokemon name is required"))?;

        self.captured.set_captured(name, request.captured).await?;
        info!(pokemon = %name, captured = request.captured, "Captured flag updated");
        Ok(())
    }

    async fn invalidate_cache(&self) -> bool {
        self.cache.invalidate().await
    }

    async fn legacy_catalog(&self) -> PokedexResult<Vec<Pokemon>> {
        self.provider.fetch_all().await
    }

    async fn health(&self) -> HealthReport {
        let cache = HealthStatus::from_probe(self.cache.health_check().await, "ping failed");
        let database = self.database.check().await;
        let provider =
            HealthStatus::from_probe(self.provider.is_available().await, "catalog file unavailable");

        HealthReport::new(&cache, self.cache.is_enabled(), &database, &provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConnector, CacheStore};
    use pokedex_repository::CapturedPokemon;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::time::Duration;

    struct StaticProvider {
        records: Vec<Pokemon>,
        available: bool,
    }

    #[async_trait]
    impl CatalogProvider for StaticProvider {
        async fn fetch_all(&self) -> PokedexResult<Vec<Pokemon>> {
            Ok(self.records.clone())
        }

        async fn is_available(&self) -> bool {
            self.available
        }
    }

    /// In-memory captured repository.
    #[derive(Default)]
    struct InMemoryCapturedRepository {
        rows: Mutex<BTreeMap<String, ()>>,
    }

    #[async_trait]
    impl CapturedRepository for InMemoryCapturedRepository {
        async fn list_captured(&self) -> PokedexResult<Vec<CapturedPokemon>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .keys()
                .map(|name| CapturedPokemon {
                    pokemon_name: name.clone(),
                    captured_at: None,
                })
                .collect())
        }

        async fn set_captured(&self, name: &str, captured: bool) -> PokedexResult<()> {
            let mut rows = self.rows.lock().unwrap();
            if captured {
                rows.entry(name.to_string()).or_insert(());
            } else {
                rows.remove(name);
            }
            Ok(())
        }
    }

    struct FixedHealth(HealthStatus);

    #[async_trait]
    impl HealthCheck for FixedHealth {
        fn name(&self) -> &str {
            "database"
        }

        async fn check(&self) -> HealthStatus {
            self.0.clone()
        }
    }

    struct RefusingConnector;

    #[async_trait]
    impl CacheConnector for RefusingConnector {
        async fn connect(&self) -> PokedexResult<Arc<dyn CacheStore>> {
            Err(PokedexError::Cache("connection refused".into()))
        }
    }

    fn catalog() -> Vec<Pokemon> {
        (1..=12)
            .map(|n| {
                let kind = if n % 3 == 0 { "Water" } else { "Fire" };
                Pokemon::new(n, format!("Mon{n}")).with_types(Some(kind), None)
            })
            .collect()
    }

    fn service_with(database: HealthStatus, available: bool) -> CatalogServiceImpl {
        let provider: Arc<dyn CatalogProvider> = Arc::new(StaticProvider {
            records: catalog(),
            available,
        });
        let cache = Arc::new(CatalogCache::new(
            provider.clone(),
            Arc::new(RefusingConnector),
            Duration::from_secs(120),
        ));

        CatalogServiceImpl::new(
            cache,
            provider,
            Arc::new(InMemoryCapturedRepository::default()),
            Arc::new(FixedHealth(database)),
        )
    }

    fn service() -> CatalogServiceImpl {
        service_with(HealthStatus::Healthy, true)
    }

    #[tokio::test]
    async fn test_list_pokemon_descending_first_page() {
        let query = CatalogQuery::new(1, 5, pokedex_core::SortDirection::Desc);
        let response = service().list_pokemon(query).await.unwrap();

        let numbers: Vec<i64> = response.pokemon.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![12, 11, 10, 9, 8]);
        assert_eq!(response.total, 12);
        assert_eq!(response.total_pages, 3);
    }

    #[tokio::test]
    async fn test_list_pokemon_with_category() {
        let query = CatalogQuery::default().with_category(Some("water".to_string()));
        let response = service().list_pokemon(query).await.unwrap();

        assert_eq!(response.total, 4);
        assert!(response
            .pokemon
            .iter()
            .all(|p| p.type_one.as_deref() == Some("Water")));
    }

    #[tokio::test]
    async fn test_list_types_without_cache() {
        let response = service().list_types().await.unwrap();
        assert_eq!(response.types, vec!["Fire", "Water"]);
    }

    #[tokio::test]
    async fn test_capture_and_release() {
        let service = service();

        for _ in 0..2 {
            service
                .set_captured(CaptureRequest {
                    name: Some("Mon1".into()),
                    captured: true,
                })
                .await
                .unwrap();
        }
        assert_eq!(service.list_captured().await.unwrap().captured, vec!["Mon1"]);

        service
            .set_captured(CaptureRequest {
                name: Some("Mon1".into()),
                captured: false,
            })
            .await
            .unwrap();
        assert!(service.list_captured().await.unwrap().captured.is_empty());
    }

    #[tokio::test]
    async fn test_capture_requires_name() {
        let err = service()
            .set_captured(CaptureRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.client_message(), "Pokemon name is required");
    }

    #[tokio::test]
    async fn test_capture_accepts_empty_name() {
        let service = service();
        service
            .set_captured(CaptureRequest {
                name: Some(String::new()),
                captured: true,
            })
            .await
            .unwrap();

        assert_eq!(service.list_captured().await.unwrap().captured, vec![""]);
    }

    #[tokio::test]
    async fn test_invalidate_without_cache_fails_softly() {
        assert!(!service().invalidate_cache().await);
    }

    #[tokio::test]
    async fn test_legacy_catalog_is_unpaginated() {
        assert_eq!(service().legacy_catalog().await.unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_health_ignores_cache() {
        let report = service().health().await;

        assert!(report.is_healthy());
        assert_eq!(report.services.cache.status, "unhealthy");
        assert!(!report.services.cache.enabled);
    }

    #[tokio::test]
    async fn test_health_degraded_when_provider_missing() {
        let report = service_with(HealthStatus::Healthy, false).health().await;
        assert_eq!(report.status, "degraded");
        assert_eq!(report.services.provider_file.status, "unhealthy");
    }

    #[tokio::test]
    async fn test_health_degraded_when_database_down() {
        let report = service_with(HealthStatus::Unhealthy("refused".into()), true)
            .health()
            .await;
        assert!(!report.is_healthy());
    }
}
