//! Recipe service trait definition.

use crate::dto::{RecipeListResponse, RecipeRequest};
use async_trait::async_trait;
use cookbook_core::{CookbookResult, Interface, Recipe};

/// Recipe service trait.
#[async_trait]
pub trait RecipeService: Interface + Send + Sync {
    /// Lists every internal recipe.
    async fn list_recipes(&self) -> CookbookResult<RecipeListResponse>;

    /// Searches internal recipes by title and appends external matches.
    ///
    /// A blank query returns an empty list without searching anything.
    async fn search_recipes(&self, query: &str) -> CookbookResult<RecipeListResponse>;

    /// Gets an internal recipe by id.
    async fn get_recipe(&self, id: i64) -> CookbookResult<Recipe>;

    /// Creates an internal recipe.
    async fn create_recipe(&self, request: RecipeRequest) -> CookbookResult<Recipe>;

    /// Replaces an internal recipe.
    async fn update_recipe(&self, id: i64, request: RecipeRequest) -> CookbookResult<Recipe>;

    /// Deletes an internal recipe.
    async fn delete_recipe(&self, id: i64) -> CookbookResult<()>;
}
