//! Process-local recipe storage.

mod recipe_repository;
mod seed;

pub use recipe_repository::{InMemoryRecipeRepository, InMemoryRecipeRepositoryParameters, RecipeStore};
pub use seed::demo_recipes;
