//! HTTP client for TheMealDB name search.

use super::convert::convert_meals;
use crate::external_source::ExternalRecipeSource;
use crate::metrics::SearchMetrics;
use async_trait::async_trait;
use cookbook_config::MealDbConfig;
use cookbook_core::{CookbookError, CookbookResult, Recipe};
use reqwest::Client;
use serde::Deserialize;
use shaku::Component;
use tracing::{debug, warn};

const SERVICE: &str = "mealdb";

/// TheMealDB search endpoint response.
///
/// `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    meals: Option<Vec<serde_json::Value>>,
}

/// TheMealDB client.
#[derive(Component)]
#[shaku(interface = ExternalRecipeSource)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Creates a client with the configured request timeout.
    pub fn new(config: &MealDbConfig) -> CookbookResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CookbookError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the DI parameters for this component.
    pub fn parameters(config: &MealDbConfig) -> CookbookResult<MealDbClientParameters> {
        let Self { client, base_url } = Self::new(config)?;
        Ok(MealDbClientParameters { client, base_url })
    }

    async fn fetch(&self, query: &str) -> CookbookResult<Vec<serde_json::Value>> {
        let url = format!("{}/search.php", self.base_url);
        SearchMetrics::mealdb_request();

        let response = self
            .client
            .get(&url)
            .query(&[("s", query)])
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CookbookError::external(
                SERVICE,
                format!("search returned HTTP {}", status),
            ));
        }

        let body: SearchResponse = response.json().await.map_err(map_request_error)?;
        Ok(body.meals.unwrap_or_default())
    }
}

fn map_request_error(err: reqwest::Error) -> CookbookError {
    if err.is_timeout() {
        CookbookError::Timeout(format!("TheMealDB search: {}", err))
    } else if err.is_decode() {
        CookbookError::external(SERVICE, format!("invalid response body: {}", err))
    } else {
        CookbookError::external(SERVICE, err.to_string())
    }
}

#[async_trait]
impl ExternalRecipeSource for MealDbClient {
    async fn try_search_external(&self, query: &str) -> CookbookResult<Vec<Recipe>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Searching TheMealDB for '{}'", query);

        let meals = self.fetch(query).await.inspect_err(|e| {
            warn!("TheMealDB search for '{}' failed: {}", query, e);
            SearchMetrics::mealdb_failed(e.error_code());
        })?;

        let recipes = convert_meals(&meals);
        debug!(
            "TheMealDB returned {} meals, {} converted",
            meals.len(),
            recipes.len()
        );
        Ok(recipes)
    }
}

impl std::fmt::Debug for MealDbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MealDbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
