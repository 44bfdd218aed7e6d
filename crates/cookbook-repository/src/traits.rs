//! Repository trait definitions.

use async_trait::async_trait;
use cookbook_core::{CookbookResult, Interface, Recipe, RecipeDraft};

/// Recipe repository trait.
///
/// Ids are positive integers assigned on create. Returned recipes are owned
/// copies; mutating one never changes what the store holds.
#[async_trait]
pub trait RecipeRepository: Interface + Send + Sync {
    /// Lists every recipe in ascending id order.
    async fn list(&self) -> CookbookResult<Vec<Recipe>>;

    /// Case-insensitive substring match on the title. An empty query matches nothing.
    async fn search(&self, query: &str) -> CookbookResult<Vec<Recipe>>;

    /// Finds a recipe by id.
    async fn get(&self, id: i64) -> CookbookResult<Option<Recipe>>;

    /// Stores a new recipe under the next id. Ids start at `1`, only grow, and
    /// are never reused after a delete.
    async fn create(&self, draft: &RecipeDraft) -> CookbookResult<Recipe>;

    /// Replaces every field of an existing recipe. Returns `None` when no recipe has `id`.
    async fn update(&self, id: i64, draft: &RecipeDraft) -> CookbookResult<Option<Recipe>>;

    /// Deletes a recipe. Returns `true` if one was removed.
    async fn delete(&self, id: i64) -> CookbookResult<bool>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> CookbookResult<()> {
        Ok(())
    }
}
