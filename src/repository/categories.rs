//! Category listing adapter.

use std::sync::Arc;

use crate::domain::error::Result;
use crate::domain::Category;
use crate::network::api::RecipeApi;

/// Adapter for the category listing, fetched once at startup.
#[derive(Clone)]
pub struct CategoriesRepository {
    api: Arc<dyn RecipeApi>,
}

impl CategoriesRepository {
    /// Creates the adapter over a shared remote collaborator.
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self { api }
    }

    /// Fetches all categories offered by the remote source.
    ///
    /// # Errors
    ///
    /// Propagates transport and protocol failures from the collaborator.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let categories = self.api.categories().await?.into_categories();
        tracing::debug!(count = categories.len(), "categories fetched");
        Ok(categories)
    }
}
