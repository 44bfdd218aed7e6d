//! Dependency injection modules using Shaku.
//!
//! One module per storage backend:
//! - `InMemoryModule`: process-local recipe store, optionally seeded
//! - `SqliteModule`: recipes persisted through the SQLite pool
//!
//! Both share the same search stack (Redis cache, TheMealDB client and the
//! cache-aside layer between them).

use cookbook_config::AppConfig;
use cookbook_core::CookbookResult;
use cookbook_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, InMemoryRecipeRepository,
    RecipeRepository, SqliteRecipeRepository,
};
use cookbook_service::{
    CacheAsideRecipeSource, CacheAsideRecipeSourceParameters, CacheInterface, HealthService,
    HealthServiceComponent, MealDbClient, RecipeService, RecipeServiceComponent, RedisCacheService,
    RedisCacheServiceParameters,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

module! {
    pub InMemoryModule {
        components = [
            InMemoryRecipeRepository,
            RedisCacheService,
            MealDbClient,
            CacheAsideRecipeSource,
            RecipeServiceComponent,
            HealthServiceComponent,
        ],
        providers = [],
    }
}

module! {
    pub SqliteModule {
        components = [
            DatabasePool,
            SqliteRecipeRepository,
            RedisCacheService,
            MealDbClient,
            CacheAsideRecipeSource,
            RecipeServiceComponent,
            HealthServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the module backed by the in-memory recipe store.
pub async fn build_in_memory_module(config: &AppConfig) -> CookbookResult<Arc<InMemoryModule>> {
    let cache = RedisCacheService::connect(&config.redis).await;

    let module = InMemoryModule::builder()
        .with_component_parameters::<InMemoryRecipeRepository>(InMemoryRecipeRepository::parameters(
            config.repository.seed,
        ))
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache.pool(),
            timeout: cache.timeout(),
        })
        .with_component_parameters::<MealDbClient>(MealDbClient::parameters(&config.mealdb)?)
        .with_component_parameters::<CacheAsideRecipeSource>(CacheAsideRecipeSourceParameters {
            ttl: config.mealdb.cache_ttl(),
        })
        .build();

    Ok(Arc::new(module))
}

/// Builds the module backed by SQLite, running migrations when configured.
pub async fn build_sqlite_module(config: &AppConfig) -> CookbookResult<Arc<SqliteModule>> {
    let db_pool = DatabasePool::connect(&config.database).await?;
    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let cache = RedisCacheService::connect(&config.redis).await;

    let module = SqliteModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache.pool(),
            timeout: cache.timeout(),
        })
        .with_component_parameters::<MealDbClient>(MealDbClient::parameters(&config.mealdb)?)
        .with_component_parameters::<CacheAsideRecipeSource>(CacheAsideRecipeSourceParameters {
            ttl: config.mealdb.cache_ttl(),
        })
        .build();

    Ok(Arc::new(module))
}

/// Resolves the services handlers need.
pub trait ServiceResolver {
    fn recipe_service(&self) -> Arc<dyn RecipeService>;

    fn health_service(&self) -> Arc<dyn HealthService>;
}

impl ServiceResolver for InMemoryModule {
    fn recipe_service(&self) -> Arc<dyn RecipeService> {
        self.resolve()
    }

    fn health_service(&self) -> Arc<dyn HealthService> {
        self.resolve()
    }
}

impl ServiceResolver for SqliteModule {
    fn recipe_service(&self) -> Arc<dyn RecipeService> {
        self.resolve()
    }

    fn health_service(&self) -> Arc<dyn HealthService> {
        self.resolve()
    }
}

/// Resolves infrastructure components.
pub trait InfrastructureResolver {
    fn recipe_repository(&self) -> Arc<dyn RecipeRepository>;

    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl InfrastructureResolver for InMemoryModule {
    fn recipe_repository(&self) -> Arc<dyn RecipeRepository> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}

impl InfrastructureResolver for SqliteModule {
    fn recipe_repository(&self) -> Arc<dyn RecipeRepository> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_service::{ExternalRecipeSource, ExternalSearchCache};

    fn disabled_redis_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config
    }

    #[test]
    fn test_module_trait_bounds() {
        fn _assert_resolvers<T: ServiceResolver + InfrastructureResolver>() {}
        fn _assert_search_stack<
            T: HasComponent<dyn ExternalRecipeSource> + HasComponent<dyn ExternalSearchCache>,
        >() {
        }
        fn _assert_pool<T: HasComponent<dyn DatabasePoolInterface>>() {}

        _assert_resolvers::<InMemoryModule>();
        _assert_resolvers::<SqliteModule>();
        _assert_search_stack::<InMemoryModule>();
        _assert_search_stack::<SqliteModule>();
        _assert_pool::<SqliteModule>();
    }

    #[tokio::test]
    async fn test_in_memory_module_serves_seed_recipes() {
        let module = build_in_memory_module(&disabled_redis_config()).await.unwrap();

        let recipes = module.recipe_service().list_recipes().await.unwrap();
        assert_eq!(recipes.recipes.len(), 2);
        assert!(!module.cache().is_enabled());
    }

    #[tokio::test]
    async fn test_in_memory_module_without_seed_is_empty() {
        let mut config = disabled_redis_config();
        config.repository.seed = false;

        let module = build_in_memory_module(&config).await.unwrap();

        assert!(module.recipe_repository().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_module_runs_migrations() {
        let mut config = disabled_redis_config();
        config.database.url = "sqlite::memory:".to_string();
        config.database.min_connections = 1;
        config.database.max_connections = 1;

        let module = build_sqlite_module(&config).await.unwrap();

        let health = module.health_service().check().await;
        assert!(health.is_ready());
        assert!(module.recipe_repository().list().await.unwrap().is_empty());
    }
}
