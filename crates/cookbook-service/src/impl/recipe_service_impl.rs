//! Recipe service implementation.

use crate::cached_source::ExternalSearchCache;
use crate::dto::{RecipeListResponse, RecipeRequest};
use crate::recipe_service::RecipeService;
use async_trait::async_trait;
use cookbook_core::{CookbookError, CookbookResult, Recipe, RecipeDraft, ValidateExt};
use cookbook_repository::RecipeRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

const RESOURCE: &str = "Recipe";

/// Concrete recipe service component for Shaku DI.
///
/// Local CRUD goes straight to the repository. Search merges repository
/// matches with cached external matches, local results first.
#[derive(Component)]
#[shaku(interface = RecipeService)]
pub struct RecipeServiceComponent {
    #[shaku(inject)]
    repository: Arc<dyn RecipeRepository>,
    #[shaku(inject)]
    external: Arc<dyn ExternalSearchCache>,
}

impl RecipeServiceComponent {
    /// Creates a recipe service outside of a DI module.
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>, external: Arc<dyn ExternalSearchCache>) -> Self {
        Self {
            repository,
            external,
        }
    }
}

#[async_trait]
impl RecipeService for RecipeServiceComponent {
    async fn list_recipes(&self) -> CookbookResult<RecipeListResponse> {
        debug!("Listing recipes");

        let recipes = self.repository.list().await?;
        Ok(RecipeListResponse::from(recipes))
    }

    async fn search_recipes(&self, query: &str) -> CookbookResult<RecipeListResponse> {
        if query.trim().is_empty() {
            return Ok(RecipeListResponse::from(Vec::new()));
        }

        debug!("Searching recipes: {}", query);

        let (local, external) = tokio::join!(
            self.repository.search(query),
            self.external.get_or_fetch(query)
        );

        let mut recipes = local?;
        debug!(
            "Search '{}' matched {} local and {} external recipes",
            query,
            recipes.len(),
            external.len()
        );
        recipes.extend(external);

        Ok(RecipeListResponse::from(recipes))
    }

    async fn get_recipe(&self, id: i64) -> CookbookResult<Recipe> {
        debug!("Getting recipe: {}", id);

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| CookbookError::not_found(RESOURCE, id))
    }

    async fn create_recipe(&self, request: RecipeRequest) -> CookbookResult<Recipe> {
        debug!("Creating recipe: {}", request.title);

        request.validate_request()?;

        let recipe = self.repository.create(&RecipeDraft::from(request)).await?;

        info!("Recipe created: {}", recipe.id);
        Ok(recipe)
    }

    async fn update_recipe(&self, id: i64, request: RecipeRequest) -> CookbookResult<Recipe> {
        debug!("Updating recipe: {}", id);

        request.validate_request()?;

        let recipe = self
            .repository
            .update(id, &RecipeDraft::from(request))
            .await?
            .ok_or_else(|| CookbookError::not_found(RESOURCE, id))?;

        info!("Recipe updated: {}", id);
        Ok(recipe)
    }

    async fn delete_recipe(&self, id: i64) -> CookbookResult<()> {
        debug!("Deleting recipe: {}", id);

        if !self.repository.delete(id).await? {
            return Err(CookbookError::not_found(RESOURCE, id));
        }

        info!("Recipe deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for RecipeServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeServiceComponent").finish_non_exhaustive()
    }
}
