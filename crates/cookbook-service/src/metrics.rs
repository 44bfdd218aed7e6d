//! Prometheus metrics for the external search path.

use metrics::{counter, describe_counter};

/// Metric names for external search.
pub mod names {
    /// Cached search results served without calling TheMealDB.
    pub const CACHE_HITS_TOTAL: &str = "cookbook_recipe_cache_hits_total";
    /// Searches that had to call TheMealDB.
    pub const CACHE_MISSES_TOTAL: &str = "cookbook_recipe_cache_misses_total";
    /// Fetched results that could not be written to the cache.
    pub const CACHE_STORE_FAILURES_TOTAL: &str = "cookbook_recipe_cache_store_failures_total";
    /// Requests sent to TheMealDB.
    pub const MEALDB_REQUESTS_TOTAL: &str = "cookbook_mealdb_requests_total";
    /// Failed TheMealDB requests, labelled by reason.
    pub const MEALDB_FAILURES_TOTAL: &str = "cookbook_mealdb_failures_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of external searches answered from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of external searches not found in the cache"
    );
    describe_counter!(
        names::CACHE_STORE_FAILURES_TOTAL,
        "Total number of search results that failed to be cached"
    );
    describe_counter!(
        names::MEALDB_REQUESTS_TOTAL,
        "Total number of requests sent to TheMealDB"
    );
    describe_counter!(
        names::MEALDB_FAILURES_TOTAL,
        "Total number of failed TheMealDB requests"
    );
}

/// Search metrics recorder.
pub struct SearchMetrics;

impl SearchMetrics {
    /// Record a cache hit.
    pub fn cache_hit() {
        counter!(names::CACHE_HITS_TOTAL).increment(1);
    }

    /// Record a cache miss.
    pub fn cache_miss() {
        counter!(names::CACHE_MISSES_TOTAL).increment(1);
    }

    /// Record a failed cache write.
    pub fn cache_store_failed() {
        counter!(names::CACHE_STORE_FAILURES_TOTAL).increment(1);
    }

    /// Record an outgoing TheMealDB request.
    pub fn mealdb_request() {
        counter!(names::MEALDB_REQUESTS_TOTAL).increment(1);
    }

    /// Record a failed TheMealDB request.
    pub fn mealdb_failed(reason: &'static str) {
        counter!(names::MEALDB_FAILURES_TOTAL, "reason" => reason).increment(1);
    }
}
