//! Recipe controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use cookbook_core::{CookbookError, Recipe};
use cookbook_service::{RecipeListResponse, RecipeRequest, SearchQuery};
use tracing::debug;

/// Creates the recipe router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/search", get(search_recipes))
        .route("/:id", get(get_recipe).put(update_recipe).delete(delete_recipe))
}

/// List all internal recipes.
#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All internal recipes", body = RecipeListResponse)
    )
)]
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<RecipeListResponse> {
    debug!("List recipes request");

    let response = state.recipe_service.list_recipes().await?;
    ok(response)
}

/// Search internal recipes by title, followed by TheMealDB matches.
#[utoipa::path(
    get,
    path = "/recipes/search",
    tag = "recipes",
    params(SearchQuery),
    responses(
        (status = 200, description = "Internal matches followed by external matches", body = RecipeListResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<RecipeListResponse> {
    let q = query.q.unwrap_or_default();
    debug!("Search recipes request: {}", q);

    let response = state.recipe_service.search_recipes(&q).await?;
    ok(response)
}

/// Get an internal recipe by id.
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 404, description = "No recipe with this id")
    )
)]
pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Recipe> {
    debug!("Get recipe request: {}", id);

    let id = parse_recipe_id(&id)?;
    let recipe = state.recipe_service.get_recipe(id).await?;
    ok(recipe)
}

/// Create an internal recipe.
#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = RecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 422, description = "Malformed body or blank title")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RecipeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Recipe>>), AppError> {
    debug!("Create recipe request: {}", request.title);

    let recipe = state.recipe_service.create_recipe(request).await?;
    Ok(created(recipe))
}

/// Replace an internal recipe.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 404, description = "No recipe with this id"),
        (status = 422, description = "Malformed body or blank title")
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<RecipeRequest>,
) -> ApiResult<Recipe> {
    debug!("Update recipe request: {}", id);

    let id = parse_recipe_id(&id)?;
    let recipe = state.recipe_service.update_recipe(id, request).await?;
    ok(recipe)
}

/// Delete an internal recipe.
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "No recipe with this id")
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete recipe request: {}", id);

    let id = parse_recipe_id(&id)?;
    state.recipe_service.delete_recipe(id).await?;
    Ok(no_content())
}

fn parse_recipe_id(id: &str) -> Result<i64, AppError> {
    id.parse::<i64>()
        .map_err(|_| AppError(CookbookError::validation(format!("Invalid recipe ID: {}", id))))
}
