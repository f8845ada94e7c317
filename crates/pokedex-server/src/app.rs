//! Application wiring.
//!
//! Every long-lived component is built here, owned by [`Application`] and
//! shut down explicitly when the server stops.

use crate::startup::{print_startup_info, shutdown_signal};
use axum::Router;
use pokedex_config::AppConfig;
use pokedex_core::{PokedexError, PokedexResult};
use pokedex_repository::{
    create_pool, CatalogProvider, DatabasePool, DatabasePoolInterface, JsonFileCatalogProvider,
    PgCapturedRepository,
};
use pokedex_rest::{create_router, AppState};
use pokedex_service::{CatalogCache, CatalogServiceImpl, RedisConnector};
use std::sync::Arc;
use tracing::{info, warn};

/// A fully wired server, ready to listen.
pub struct Application {
    config: AppConfig,
    db_pool: Arc<DatabasePool>,
    cache: Arc<CatalogCache>,
    router: Router,
}

impl Application {
    /// Connects to PostgreSQL, applies migrations, connects the cache and
    /// builds the router.
    ///
    /// Fails only when the database is unreachable. An unreachable Redis
    /// leaves caching disabled.
    pub async fn build(config: AppConfig) -> PokedexResult<Self> {
        let db_pool = create_pool(&config.database).await?;
        db_pool.run_migrations().await?;

        let provider: Arc<dyn CatalogProvider> =
            Arc::new(JsonFileCatalogProvider::new(&config.provider.data_file));
        if !provider.is_available().await {
            warn!(
                path = %config.provider.data_file.display(),
                "Catalog file not readable; catalog requests will fail until it appears"
            );
        }

        let cache = Arc::new(CatalogCache::new(
            provider.clone(),
            Arc::new(RedisConnector::new(config.redis.clone())),
            config.cache.ttl(),
        ));

        if config.redis.enabled {
            info!("Initializing Redis connection...");
            cache
                .initialize(config.redis.init_max_retries, config.redis.init_retry_delay())
                .await;
        } else {
            info!("Redis disabled by configuration, serving catalog without cache");
        }

        let captured = Arc::new(PgCapturedRepository::new(db_pool.clone()));
        let catalog_service = Arc::new(CatalogServiceImpl::new(
            cache.clone(),
            provider,
            captured,
            db_pool.clone(),
        ));

        let router = create_router(AppState::new(catalog_service), &config.server);

        Ok(Self {
            config,
            db_pool,
            cache,
            router,
        })
    }

    /// Serves until SIGINT/SIGTERM, then releases the cache and the pool.
    pub async fn run(self) -> PokedexResult<()> {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| PokedexError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        print_startup_info(&self.config, self.cache.is_enabled());

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        self.cache.shutdown().await;
        self.db_pool.close().await;
        info!("Server shutdown complete");

        result.map_err(|e| PokedexError::Internal(format!("REST server error: {}", e)))
    }
}
