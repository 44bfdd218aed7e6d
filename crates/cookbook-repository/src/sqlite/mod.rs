//! SQLite recipe storage.

mod recipe_repository;

pub use recipe_repository::{SqliteRecipeRepository, SqliteRecipeRepositoryParameters};
