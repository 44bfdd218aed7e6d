//! Cache-aside wrapper around the external recipe source.

use crate::cache::{cache_keys, CacheExt, CacheInterface, DEFAULT_TTL};
use crate::external_source::{fail_open, ExternalRecipeSource};
use crate::metrics::SearchMetrics;
use async_trait::async_trait;
use cookbook_core::{Interface, Recipe};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// External search with result caching.
///
/// Never fails: cache trouble degrades to a fetch, fetch trouble degrades to
/// an empty list.
#[async_trait]
pub trait ExternalSearchCache: Interface + Send + Sync {
    /// Returns cached external results for `query`, fetching and caching on a miss.
    async fn get_or_fetch(&self, query: &str) -> Vec<Recipe>;
}

/// Cache-aside implementation over an [`ExternalRecipeSource`] and a [`CacheInterface`].
///
/// Successful fetches are cached, empty ones included. Failed fetches are
/// not cached, so the next search retries the provider.
#[derive(Component)]
#[shaku(interface = ExternalSearchCache)]
pub struct CacheAsideRecipeSource {
    #[shaku(inject)]
    source: Arc<dyn ExternalRecipeSource>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl CacheAsideRecipeSource {
    /// Creates a cache-aside source.
    #[must_use]
    pub fn new(
        source: Arc<dyn ExternalRecipeSource>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self { source, cache, ttl }
    }

    async fn lookup(&self, key: &str) -> Option<Vec<Recipe>> {
        match self.cache.get::<Vec<Recipe>>(key).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!("Cache lookup for '{}' failed, treating as miss: {}", key, e);
                None
            }
        }
    }
}

#[async_trait]
impl ExternalSearchCache for CacheAsideRecipeSource {
    async fn get_or_fetch(&self, query: &str) -> Vec<Recipe> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let key = cache_keys::mealdb_search(query);

        if let Some(recipes) = self.lookup(&key).await {
            debug!("Serving {} external recipes from cache", recipes.len());
            SearchMetrics::cache_hit();
            return recipes;
        }
        SearchMetrics::cache_miss();

        let recipes = match self.source.try_search_external(query).await {
            Ok(recipes) => recipes,
            Err(e) => return fail_open(query, &e),
        };

        if let Err(e) = self.cache.set(&key, &recipes, self.ttl).await {
            warn!("Failed to cache external results for '{}': {}", key, e);
            SearchMetrics::cache_store_failed();
        }

        recipes
    }
}

impl std::fmt::Debug for CacheAsideRecipeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAsideRecipeSource")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_core::{CookbookError, CookbookResult, RecipeId, RecipeSource, NOT_SPECIFIED};
    use mockall::mock;
    use std::collections::HashMap;
    use std::sync::Mutex;

    mock! {
        Source {}

        #[async_trait]
        impl ExternalRecipeSource for Source {
            async fn try_search_external(&self, query: &str) -> CookbookResult<Vec<Recipe>>;
        }
    }

    /// In-process cache recording the TTL of each write.
    #[derive(Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, (String, Duration)>>,
        broken: bool,
    }

    impl MemoryCache {
        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn insert_raw(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (value.to_string(), DEFAULT_TTL));
        }

        fn entry(&self, key: &str) -> Option<(String, Duration)> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl CacheInterface for MemoryCache {
        async fn get_raw(&self, key: &str) -> CookbookResult<Option<String>> {
            if self.broken {
                return Err(CookbookError::Cache("connection refused".to_string()));
            }
            Ok(self.entry(key).map(|(value, _)| value))
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CookbookResult<()> {
            if self.broken {
                return Err(CookbookError::Cache("connection refused".to_string()));
            }
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (value.to_string(), ttl));
            Ok(())
        }

        async fn ping(&self) -> CookbookResult<()> {
            Ok(())
        }

        fn is_enabled(&self) -> bool {
            !self.broken
        }
    }

    fn meal(id: &str, title: &str) -> Recipe {
        Recipe {
            id: RecipeId::External(id.to_string()),
            title: title.to_string(),
            ingredients: vec!["1 cup rice".to_string()],
            steps: vec!["Cook the rice slowly".to_string()],
            prep_time: NOT_SPECIFIED.to_string(),
            cook_time: NOT_SPECIFIED.to_string(),
            difficulty: NOT_SPECIFIED.to_string(),
            cuisine: "Thai".to_string(),
            source: RecipeSource::Mealdb,
        }
    }

    fn layer(source: MockSource, cache: Arc<MemoryCache>) -> CacheAsideRecipeSource {
        CacheAsideRecipeSource::new(Arc::new(source), cache, DEFAULT_TTL)
    }

    #[tokio::test]
    async fn test_equivalent_queries_fetch_once() {
        let mut source = MockSource::new();
        source
            .expect_try_search_external()
            .times(1)
            .returning(|_| Ok(vec![meal("52772", "Pad Thai")]));

        let cache = Arc::new(MemoryCache::default());
        let layer = layer(source, cache.clone());

        let first = layer.get_or_fetch("Pad").await;
        let second = layer.get_or_fetch("  pAD ").await;

        assert_eq!(first, second);
        assert_eq!(first[0].title, "Pad Thai");

        let (_, ttl) = cache.entry("mealdb_search:pad").unwrap();
        assert_eq!(ttl, Duration::from_secs(86_400));
    }

    #[tokio::test]
    async fn test_original_query_is_passed_to_source() {
        let mut source = MockSource::new();
        source
            .expect_try_search_external()
            .withf(|query: &str| query == "  Pad ")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let layer = layer(source, Arc::new(MemoryCache::default()));
        assert!(layer.get_or_fetch("  Pad ").await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_success_is_cached() {
        let mut source = MockSource::new();
        source
            .expect_try_search_external()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let cache = Arc::new(MemoryCache::default());
        let layer = layer(source, cache.clone());

        assert!(layer.get_or_fetch("nothing").await.is_empty());
        assert!(layer.get_or_fetch("nothing").await.is_empty());
        assert_eq!(cache.entry("mealdb_search:nothing").unwrap().0, "[]");
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let mut source = MockSource::new();
        let mut calls = 0;
        source
            .expect_try_search_external()
            .times(2)
            .returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Err(CookbookError::external("mealdb", "HTTP 503"))
                } else {
                    Ok(vec![meal("1", "Green Curry")])
                }
            });

        let cache = Arc::new(MemoryCache::default());
        let layer = layer(source, cache.clone());

        assert!(layer.get_or_fetch("curry").await.is_empty());
        assert!(cache.entry("mealdb_search:curry").is_none());

        let retried = layer.get_or_fetch("curry").await;
        assert_eq!(retried[0].title, "Green Curry");
    }

    #[tokio::test]
    async fn test_unreachable_cache_still_returns_fetched_results() {
        let mut source = MockSource::new();
        source
            .expect_try_search_external()
            .times(2)
            .returning(|_| Ok(vec![meal("7", "Laksa")]));

        let layer = layer(source, Arc::new(MemoryCache::broken()));

        assert_eq!(layer.get_or_fetch("laksa").await.len(), 1);
        assert_eq!(layer.get_or_fetch("laksa").await.len(), 1);
    }

    #[tokio::test]
    async fn test_hit_is_returned_verbatim() {
        let mut source = MockSource::new();
        source.expect_try_search_external().times(0);

        let cache = Arc::new(MemoryCache::default());
        let stored = vec![meal("9", "Stored Soup")];
        cache.insert_raw(
            "mealdb_search:soup",
            &serde_json::to_string(&stored).unwrap(),
        );

        let layer = layer(source, cache);
        assert_eq!(layer.get_or_fetch("SOUP").await, stored);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let mut source = MockSource::new();
        source
            .expect_try_search_external()
            .times(1)
            .returning(|_| Ok(vec![meal("3", "Tom Yum")]));

        let cache = Arc::new(MemoryCache::default());
        cache.insert_raw("mealdb_search:tom", "{not json");

        let layer = layer(source, cache.clone());
        assert_eq!(layer.get_or_fetch("tom").await[0].title, "Tom Yum");
        assert!(cache.entry("mealdb_search:tom").unwrap().0.contains("Tom Yum"));
    }

    #[tokio::test]
    async fn test_blank_query_touches_nothing() {
        let mut source = MockSource::new();
        source.expect_try_search_external().times(0);

        let layer = layer(source, Arc::new(MemoryCache::broken()));
        assert!(layer.get_or_fetch("   ").await.is_empty());
    }
}
