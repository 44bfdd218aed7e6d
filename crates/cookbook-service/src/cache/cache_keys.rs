//! Cache key generators for consistent key naming.

/// Prefix for cached external search results.
const MEALDB_SEARCH_PREFIX: &str = "mealdb_search";

/// Generate a cache key for a TheMealDB search.
///
/// Queries that differ only in case or surrounding whitespace share a key.
#[must_use]
pub fn mealdb_search(query: &str) -> String {
    format!("{}:{}", MEALDB_SEARCH_PREFIX, query.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mealdb_search_key() {
        assert_eq!(mealdb_search("Chicken Curry"), "mealdb_search:chicken curry");
    }

    #[test]
    fn test_equivalent_queries_share_key() {
        let key = mealdb_search("Pasta");
        assert_eq!(mealdb_search(" pasta "), key);
        assert_eq!(mealdb_search("PASTA"), key);
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        assert_ne!(mealdb_search("beef  stew"), mealdb_search("beef stew"));
    }
}
