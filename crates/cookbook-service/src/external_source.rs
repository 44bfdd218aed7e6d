//! External recipe source abstraction.

use async_trait::async_trait;
use cookbook_core::{CookbookError, CookbookResult, Interface, Recipe};
use tracing::warn;

/// A third-party provider that can be searched for recipes by name.
#[async_trait]
pub trait ExternalRecipeSource: Interface + Send + Sync {
    /// Searches the provider, surfacing transport and decoding failures.
    ///
    /// A blank query yields an empty list without contacting the provider.
    async fn try_search_external(&self, query: &str) -> CookbookResult<Vec<Recipe>>;

    /// Searches the provider, degrading every failure to an empty list.
    async fn search_external(&self, query: &str) -> Vec<Recipe> {
        self.try_search_external(query)
            .await
            .unwrap_or_else(|e| fail_open(query, &e))
    }
}

/// Logs a failed provider search and returns the empty list that replaces it.
///
/// Every caller that turns a provider failure into "no external results" goes
/// through here.
pub fn fail_open(query: &str, error: &CookbookError) -> Vec<Recipe> {
    warn!(
        "External recipe search for '{}' failed, returning no results: {}",
        query, error
    );
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ExternalRecipeSource for FailingSource {
        async fn try_search_external(&self, _query: &str) -> CookbookResult<Vec<Recipe>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(CookbookError::external("mealdb", "HTTP 503"))
        }
    }

    #[tokio::test]
    async fn test_search_external_fails_open() {
        let source = FailingSource {
            calls: AtomicUsize::new(0),
        };

        assert!(source.search_external("pasta").await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fail_open_yields_no_recipes() {
        let err = CookbookError::Timeout("took too long".to_string());
        assert!(fail_open("pasta", &err).is_empty());
    }
}
