//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use cookbook_core::CookbookResult;
use shaku::Interface;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Values are stored as JSON strings to keep the trait dyn-compatible.
/// Expiry is enforced by the backing store.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> CookbookResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL, replacing any previous value.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CookbookResult<()>;

    /// Round-trips to the backing store.
    async fn ping(&self) -> CookbookResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> CookbookResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CookbookResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
