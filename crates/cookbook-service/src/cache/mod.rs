//! Caching infrastructure for the service layer.
//!
//! A cache abstraction with a Redis implementation. External search results
//! are the only values stored here.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::{
    RedisCacheService, RedisCacheServiceParameters, DEFAULT_OPERATION_TIMEOUT, DEFAULT_TTL,
};
