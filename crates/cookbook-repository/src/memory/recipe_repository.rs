//! In-memory recipe repository implementation.

use super::demo_recipes;
use crate::traits::RecipeRepository;
use async_trait::async_trait;
use cookbook_core::{CookbookResult, Recipe, RecipeDraft};
use parking_lot::Mutex;
use shaku::Component;
use tracing::debug;

/// Recipes plus the next id to hand out.
///
/// `next_id` only ever grows, so ids freed by a delete are never reassigned.
#[derive(Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    next_id: i64,
}

impl RecipeStore {
    fn new(recipes: Vec<Recipe>) -> Self {
        let next_id = recipes
            .iter()
            .filter_map(Recipe::internal_id)
            .max()
            .map_or(1, |max| max + 1);
        Self { recipes, next_id }
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// In-memory recipe repository.
///
/// Recipes are kept in ascending id order. The id counter and the collection
/// sit behind one lock, so concurrent creates never share an id.
#[derive(Component)]
#[shaku(interface = RecipeRepository)]
pub struct InMemoryRecipeRepository {
    store: Mutex<RecipeStore>,
}

impl InMemoryRecipeRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    /// Creates a repository holding the demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_recipes(demo_recipes())
    }

    /// Creates a repository holding the given recipes.
    ///
    /// Recipes without an internal id are ignored.
    #[must_use]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let mut recipes: Vec<Recipe> = recipes
            .into_iter()
            .filter(|r| r.internal_id().is_some())
            .collect();
        recipes.sort_by_key(Recipe::internal_id);

        Self {
            store: Mutex::new(RecipeStore::new(recipes)),
        }
    }

    /// Builds the DI parameters, optionally pre-loaded with the demo catalog.
    #[must_use]
    pub fn parameters(seed: bool) -> InMemoryRecipeRepositoryParameters {
        let repository = if seed { Self::seeded() } else { Self::new() };
        InMemoryRecipeRepositoryParameters {
            store: repository.store,
        }
    }
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list(&self) -> CookbookResult<Vec<Recipe>> {
        Ok(self.store.lock().recipes.clone())
    }

    async fn search(&self, query: &str) -> CookbookResult<Vec<Recipe>> {
        debug!("Searching recipes by title: {}", query);

        if query.is_empty() {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        Ok(self
            .store
            .lock()
            .recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> CookbookResult<Option<Recipe>> {
        Ok(self
            .store
            .lock()
            .recipes
            .iter()
            .find(|r| r.internal_id() == Some(id))
            .cloned())
    }

    async fn create(&self, draft: &RecipeDraft) -> CookbookResult<Recipe> {
        let mut store = self.store.lock();

        let id = store.next_id;
        store.next_id += 1;

        let recipe = Recipe::internal(id, draft.clone());
        store.recipes.push(recipe.clone());

        debug!("Created recipe {}", id);
        Ok(recipe)
    }

    async fn update(&self, id: i64, draft: &RecipeDraft) -> CookbookResult<Option<Recipe>> {
        let mut store = self.store.lock();

        let Some(slot) = store.recipes.iter_mut().find(|r| r.internal_id() == Some(id)) else {
            return Ok(None);
        };

        *slot = Recipe::internal(id, draft.clone());
        debug!("Updated recipe {}", id);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: i64) -> CookbookResult<bool> {
        let mut store = self.store.lock();
        let before = store.recipes.len();
        store.recipes.retain(|r| r.internal_id() != Some(id));

        let deleted = store.recipes.len() < before;
        debug!("Deleted recipe {}: {}", id, deleted);
        Ok(deleted)
    }
}

impl std::fmt::Debug for InMemoryRecipeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecipeRepository")
            .field("len", &self.store.lock().recipes.len())
            .finish()
    }
}
