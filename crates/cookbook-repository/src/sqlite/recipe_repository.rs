//! SQLite recipe repository implementation.

use crate::{traits::RecipeRepository, DatabasePoolInterface};
use async_trait::async_trait;
use cookbook_core::{CookbookError, CookbookResult, Recipe, RecipeDraft};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_COLUMNS: &str =
    "SELECT id, title, ingredients, steps, prep_time, cook_time, difficulty, cuisine FROM recipes";

/// SQLite recipe repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = RecipeRepository)]
pub struct SqliteRecipeRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteRecipeRepository {
    /// Creates a new SQLite recipe repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a recipe.
#[derive(Debug, FromRow)]
struct RecipeRow {
    id: i64,
    title: String,
    ingredients: String, // JSON array
    steps: String,       // JSON array
    prep_time: String,
    cook_time: String,
    difficulty: String,
    cuisine: String,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = CookbookError;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        let ingredients: Vec<String> = serde_json::from_str(&row.ingredients).map_err(|e| {
            CookbookError::Database(format!("Invalid ingredients for recipe {}: {}", row.id, e))
        })?;
        let steps: Vec<String> = serde_json::from_str(&row.steps).map_err(|e| {
            CookbookError::Database(format!("Invalid steps for recipe {}: {}", row.id, e))
        })?;

        Ok(Recipe::internal(
            row.id,
            RecipeDraft {
                title: row.title,
                ingredients,
                steps,
                prep_time: row.prep_time,
                cook_time: row.cook_time,
                difficulty: row.difficulty,
                cuisine: row.cuisine,
            },
        ))
    }
}

fn collect(rows: Vec<RecipeRow>) -> CookbookResult<Vec<Recipe>> {
    rows.into_iter().map(Recipe::try_from).collect()
}

#[async_trait]
impl RecipeRepository for SqliteRecipeRepository {
    async fn list(&self) -> CookbookResult<Vec<Recipe>> {
        debug!("Listing recipes");

        let rows = sqlx::query_as::<_, RecipeRow>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(self.pool.inner())
            .await?;

        collect(rows)
    }

    async fn search(&self, query: &str) -> CookbookResult<Vec<Recipe>> {
        debug!("Searching recipes by title: {}", query);

        if query.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, RecipeRow>(&format!(
            "{SELECT_COLUMNS} WHERE instr(lower(title), lower(?)) > 0 ORDER BY id"
        ))
        .bind(query)
        .fetch_all(self.pool.inner())
        .await?;

        collect(rows)
    }

    async fn get(&self, id: i64) -> CookbookResult<Option<Recipe>> {
        debug!("Finding recipe by id: {}", id);

        let row = sqlx::query_as::<_, RecipeRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Recipe::try_from).transpose()
    }

    async fn create(&self, draft: &RecipeDraft) -> CookbookResult<Recipe> {
        debug!("Creating recipe: {}", draft.title);

        let mut tx = self.pool.inner().begin().await?;

        // AUTOINCREMENT assigns the id; it never reuses a deleted one.
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            INSERT INTO recipes (title, ingredients, steps, prep_time, cook_time, difficulty, cuisine)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, title, ingredients, steps, prep_time, cook_time, difficulty, cuisine
            "#,
        )
        .bind(&draft.title)
        .bind(serde_json::to_string(&draft.ingredients)?)
        .bind(serde_json::to_string(&draft.steps)?)
        .bind(&draft.prep_time)
        .bind(&draft.cook_time)
        .bind(&draft.difficulty)
        .bind(&draft.cuisine)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Recipe::try_from(row)
    }

    async fn update(&self, id: i64, draft: &RecipeDraft) -> CookbookResult<Option<Recipe>> {
        debug!("Updating recipe: {}", id);

        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            UPDATE recipes
            SET title = ?, ingredients = ?, steps = ?, prep_time = ?,
                cook_time = ?, difficulty = ?, cuisine = ?
            WHERE id = ?
            RETURNING id, title, ingredients, steps, prep_time, cook_time, difficulty, cuisine
            "#,
        )
        .bind(&draft.title)
        .bind(serde_json::to_string(&draft.ingredients)?)
        .bind(serde_json::to_string(&draft.steps)?)
        .bind(&draft.prep_time)
        .bind(&draft.cook_time)
        .bind(&draft.difficulty)
        .bind(&draft.cuisine)
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Recipe::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> CookbookResult<bool> {
        debug!("Deleting recipe: {}", id);

        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> CookbookResult<()> {
        self.pool.health_check().await
    }
}

impl std::fmt::Debug for SqliteRecipeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteRecipeRepository").finish_non_exhaustive()
    }
}
