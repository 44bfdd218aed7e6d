//! Common test infrastructure for repository contract tests.

use cookbook_core::RecipeDraft;
use cookbook_repository::{
    DatabasePool, DatabasePoolInterface, InMemoryRecipeRepository, RecipeRepository,
    SqliteRecipeRepository,
};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single connection that never idles out keeps the `:memory:` database alive
/// for the lifetime of the pool.
pub async fn sqlite_repository() -> SqliteRecipeRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    let pool = DatabasePool::with_pool(pool);
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");

    SqliteRecipeRepository::new(Arc::new(pool))
}

/// Every backend under test, empty.
pub async fn empty_repositories() -> Vec<(&'static str, Box<dyn RecipeRepository>)> {
    let memory: Box<dyn RecipeRepository> = Box::new(InMemoryRecipeRepository::new());
    let sqlite: Box<dyn RecipeRepository> = Box::new(sqlite_repository().await);
    vec![("memory", memory), ("sqlite", sqlite)]
}

pub fn draft(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        ingredients: vec!["flour".to_string(), "water".to_string()],
        steps: vec!["Mix".to_string(), "Bake".to_string()],
        prep_time: "10 minutes".to_string(),
        cook_time: "30 minutes".to_string(),
        difficulty: "Easy".to_string(),
        cuisine: "Universal".to_string(),
    }
}
