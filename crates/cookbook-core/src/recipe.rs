//! Canonical recipe model shared by local storage and external sources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used for descriptive fields an external source does not provide.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Recipe identifier.
///
/// Internal ids are assigned by the repository; external ids are opaque
/// provider strings. Uniqueness only holds within one origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum RecipeId {
    Internal(i64),
    External(String),
}

impl RecipeId {
    /// Returns the numeric id for repository-owned recipes.
    #[must_use]
    pub const fn as_internal(&self) -> Option<i64> {
        match self {
            Self::Internal(id) => Some(*id),
            Self::External(_) => None,
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal(id) => write!(f, "{}", id),
            Self::External(id) => f.write_str(id),
        }
    }
}

/// Origin of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Internal,
    Mealdb,
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("internal"),
            Self::Mealdb => f.write_str("mealdb"),
        }
    }
}

/// A recipe as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub cuisine: String,
    pub source: RecipeSource,
}

impl Recipe {
    /// Builds a repository-owned recipe from its id and content.
    #[must_use]
    pub fn internal(id: i64, draft: RecipeDraft) -> Self {
        Self {
            id: RecipeId::Internal(id),
            title: draft.title,
            ingredients: draft.ingredients,
            steps: draft.steps,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            difficulty: draft.difficulty,
            cuisine: draft.cuisine,
            source: RecipeSource::Internal,
        }
    }

    /// Returns the numeric id when this recipe lives in the repository.
    #[must_use]
    pub const fn internal_id(&self) -> Option<i64> {
        self.id.as_internal()
    }
}

/// Recipe content without identity, used for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub cuisine: String,
}
