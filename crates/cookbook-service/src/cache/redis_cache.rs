//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use cookbook_config::RedisConfig;
use cookbook_core::{CookbookError, CookbookResult};
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime, Timeouts};
use shaku::Component;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default TTL for cached search results (24 hours).
pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);

/// Default upper bound for a single cache round-trip.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Redis-based cache service.
///
/// A service without a pool is disabled: lookups miss and writes are no-ops.
/// Every round-trip, including checking out a connection, is bounded by
/// `timeout`.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
    #[shaku(default = DEFAULT_OPERATION_TIMEOUT)]
    timeout: Duration,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool: Some(pool),
            timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Create a no-op cache service (for when Redis is disabled or unreachable).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Sets the per-operation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a pool whose checkout, connect and recycle steps are bounded by
    /// the configured connect timeout.
    pub fn build_pool(config: &RedisConfig) -> CookbookResult<Pool> {
        let mut timeouts = Timeouts::new();
        timeouts.wait = Some(config.connect_timeout());
        timeouts.create = Some(config.connect_timeout());
        timeouts.recycle = Some(config.connect_timeout());

        let mut pool_config = PoolConfig::new(config.pool_size);
        pool_config.timeouts = timeouts;

        let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
        redis_cfg.pool = Some(pool_config);

        redis_cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CookbookError::Cache(format!("Failed to create Redis pool: {}", e)))
    }

    /// Connects to Redis and checks it with a single PING.
    ///
    /// Never fails: a disabled configuration, a bad URL, or an unreachable
    /// server all yield a disabled cache.
    pub async fn connect(config: &RedisConfig) -> Self {
        if !config.enabled {
            info!("Redis cache disabled by configuration");
            return Self::disabled();
        }

        let pool = match Self::build_pool(config) {
            Ok(pool) => pool,
            Err(e) => {
                warn!("{}, caching disabled", e);
                return Self::disabled();
            }
        };

        let service = Self::new(Arc::new(pool)).with_timeout(config.connect_timeout());
        match service.ping().await {
            Ok(()) => {
                info!("Connected to Redis at {}", config.url);
                service
            }
            Err(e) => {
                warn!("Redis unreachable, caching disabled: {}", e);
                Self::disabled()
            }
        }
    }

    /// Returns the per-operation timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the pool, for wiring through DI parameters.
    #[must_use]
    pub fn pool(&self) -> Option<Arc<Pool>> {
        self.pool.clone()
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CookbookResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                CookbookError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(CookbookError::Cache("Cache is disabled".to_string())),
        }
    }

    /// Runs one cache round-trip, failing with `Timeout` once `self.timeout` elapses.
    async fn bounded<T, F>(&self, operation: &str, round_trip: F) -> CookbookResult<T>
    where
        F: Future<Output = CookbookResult<T>> + Send,
    {
        tokio::time::timeout(self.timeout, round_trip)
            .await
            .map_err(|_| {
                CookbookError::Timeout(format!(
                    "Redis {} did not complete within {}ms",
                    operation,
                    self.timeout.as_millis()
                ))
            })?
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> CookbookResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let value: Option<String> = self
            .bounded("GET", async {
                let mut conn = self.get_conn().await?;
                conn.get(key).await.map_err(|e| {
                    CookbookError::Cache(format!("Failed to get key '{}': {}", key, e))
                })
            })
            .await?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CookbookResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let ttl_secs = ttl.as_secs().max(1);

        self.bounded("SETEX", async {
            let mut conn = self.get_conn().await?;
            conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
                CookbookError::Cache(format!("Failed to set key '{}': {}", key, e))
            })
        })
        .await?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn ping(&self) -> CookbookResult<()> {
        self.bounded("PING", async {
            let mut conn = self.get_conn().await?;
            let _: String = deadpool_redis::redis::cmd("PING")
                .query_async(&mut conn)
                .await
                .map_err(|e| CookbookError::Cache(format!("PING failed: {}", e)))?;
            Ok(())
        })
        .await
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .field("timeout", &self.timeout)
            .finish()
    }
}
