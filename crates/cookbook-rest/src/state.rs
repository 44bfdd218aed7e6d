//! Application state for Axum handlers.

use cookbook_service::{HealthService, RecipeService};
use shaku::HasComponent;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<dyn RecipeService>,
    pub health_service: Arc<dyn HealthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        recipe_service: Arc<dyn RecipeService>,
        health_service: Arc<dyn HealthService>,
    ) -> Self {
        Self {
            recipe_service,
            health_service,
        }
    }

    /// Resolves the services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: HasComponent<dyn RecipeService> + HasComponent<dyn HealthService>,
    {
        Self::new(module.resolve(), module.resolve())
    }
}
