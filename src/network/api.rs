//! Remote recipe API collaborator.
//!
//! This module defines [`RecipeApi`], the seam behind which the remote recipe
//! source sits, and [`MealDbClient`], the production implementation over HTTP.
//! The trait exposes exactly the four read endpoints the application consumes
//! plus the category listing; tests substitute a stub implementation to drive
//! the view-model layer without a network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::error::{ForkTalesError, Result};
use crate::network::responses::{CategoriesResponse, RecipeDetailsResponse, RecipesResponse};

/// Default base URL of the remote recipe API.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/";

/// Default path-embedded API key segment (the public test key).
pub const DEFAULT_API_KEY: &str = "1";

/// Request timeout, matching the original client configuration.
const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

/// The remote recipe source, as seen by the repository adapters.
///
/// All operations are read-only. Implementations return wire envelopes; the
/// adapters own the unwrapping so that envelope conventions stay in one place.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetches the recipe summaries of one category.
    async fn recipes_by_category(&self, category: &str) -> Result<RecipesResponse>;

    /// Fetches the full details of one recipe by its identifier.
    ///
    /// The envelope is expected to hold exactly one element; enforcing that
    /// is the adapter's job.
    async fn recipe_details_by_id(&self, id: &str) -> Result<RecipeDetailsResponse>;

    /// Fetches one random recipe.
    async fn random_recipe(&self) -> Result<RecipeDetailsResponse>;

    /// Searches recipes by free text.
    async fn search_recipes(&self, query: &str) -> Result<RecipeDetailsResponse>;

    /// Fetches the category listing.
    async fn categories(&self) -> Result<CategoriesResponse>;
}

/// HTTP implementation of [`RecipeApi`].
///
/// Wraps a shared `reqwest` client configured with the crate's timeout. The
/// base URL carries the path-embedded key segment, so request paths are just
/// the endpoint name plus query parameters.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl MealDbClient {
    /// Creates a client against the given base URL and key segment.
    ///
    /// # Errors
    ///
    /// Returns [`ForkTalesError::Config`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| ForkTalesError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: format!("{}/{}/", base_url.trim_end_matches('/'), api_key),
        })
    }

    /// Issues a GET request and decodes the JSON response envelope.
    ///
    /// Transport failures classify as [`ForkTalesError::Transport`] via the
    /// error conversion; a non-2xx status or an undecodable body is a
    /// [`ForkTalesError::Protocol`].
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{endpoint}", self.base_url);
        tracing::debug!(url = %url, "requesting remote endpoint");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = %status, "remote returned error status");
            return Err(ForkTalesError::Protocol(format!("HTTP {status} from {url}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ForkTalesError::Protocol(format!("failed to decode response from {url}: {e}")))
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn recipes_by_category(&self, category: &str) -> Result<RecipesResponse> {
        self.get("filter.php", &[("c", category)]).await
    }

    async fn recipe_details_by_id(&self, id: &str) -> Result<RecipeDetailsResponse> {
        self.get("lookup.php", &[("i", id)]).await
    }

    async fn random_recipe(&self) -> Result<RecipeDetailsResponse> {
        self.get("random.php", &[]).await
    }

    async fn search_recipes(&self, query: &str) -> Result<RecipeDetailsResponse> {
        self.get("search.php", &[("s", query)]).await
    }

    async fn categories(&self) -> Result<CategoriesResponse> {
        self.get("categories.php", &[]).await
    }
}
