//! Recipes-by-category adapter.

use std::sync::Arc;

use crate::domain::error::Result;
use crate::domain::Recipe;
use crate::network::api::RecipeApi;

/// Adapter for fetching recipe summaries one category at a time.
///
/// Wraps the remote collaborator and performs exactly one piece of shape
/// adaptation: every returned summary's `category` field is stamped with the
/// requested category name, because the remote source does not reliably echo
/// it back.
#[derive(Clone)]
pub struct RecipesRepository {
    api: Arc<dyn RecipeApi>,
}

impl RecipesRepository {
    /// Creates the adapter over a shared remote collaborator.
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self { api }
    }

    /// Fetches the summaries of one category, stamped with that category.
    ///
    /// # Errors
    ///
    /// Propagates transport and protocol failures from the collaborator.
    pub async fn recipes_by_category(&self, category: &str) -> Result<Vec<Recipe>> {
        let mut recipes = self.api.recipes_by_category(category).await?.into_recipes();
        for recipe in &mut recipes {
            recipe.category = category.to_string();
        }

        tracing::debug!(category = %category, count = recipes.len(), "recipes fetched");
        Ok(recipes)
    }
}
