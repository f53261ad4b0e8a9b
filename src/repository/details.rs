//! Recipe-details, random, and search adapter.

use std::sync::Arc;

use crate::domain::error::{ForkTalesError, Result};
use crate::domain::RecipeDetails;
use crate::network::api::RecipeApi;

/// Adapter for the detail-shaped endpoints: lookup by id, random, and search.
///
/// Lookup and random follow the remote's zero-or-one envelope convention and
/// unwrap to the first element; an empty envelope on those endpoints is a
/// collaborator contract violation and surfaces as a protocol failure. Search
/// returns the full (possibly empty) list.
#[derive(Clone)]
pub struct RecipeDetailsRepository {
    api: Arc<dyn RecipeApi>,
}

impl RecipeDetailsRepository {
    /// Creates the adapter over a shared remote collaborator.
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self { api }
    }

    /// Fetches the details of one recipe by identifier.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures; an empty envelope becomes
    /// [`ForkTalesError::Protocol`].
    pub async fn details_by_id(&self, id: &str) -> Result<RecipeDetails> {
        let mut details = self.api.recipe_details_by_id(id).await?.into_details();
        if details.is_empty() {
            return Err(ForkTalesError::Protocol(format!(
                "empty envelope for recipe lookup {id}"
            )));
        }
        Ok(details.remove(0))
    }

    /// Fetches one random recipe.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures; an empty envelope becomes
    /// [`ForkTalesError::Protocol`].
    pub async fn random(&self) -> Result<RecipeDetails> {
        let mut details = self.api.random_recipe().await?.into_details();
        if details.is_empty() {
            return Err(ForkTalesError::Protocol(
                "empty envelope for random recipe".to_string(),
            ));
        }
        Ok(details.remove(0))
    }

    /// Searches recipes by free text, returning all matches.
    ///
    /// No match is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Propagates transport and protocol failures from the collaborator.
    pub async fn search(&self, query: &str) -> Result<Vec<RecipeDetails>> {
        let results = self.api.search_recipes(query).await?.into_details();
        tracing::debug!(query = %query, count = results.len(), "search complete");
        Ok(results)
    }
}
