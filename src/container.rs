//! Process-wide dependency container.
//!
//! [`AppContainer`] is constructed once at process start, owns the shared
//! collaborators (HTTP client, favorites store) and the repository adapters
//! over them, and hands out view-model instances wired to those adapters. It
//! lives for the whole process and is torn down only at exit.

use std::sync::{Arc, Mutex};

use crate::app::{ForkTalesViewModel, LoginViewModel, StaticCredentials};
use crate::domain::error::Result;
use crate::network::api::{MealDbClient, RecipeApi};
use crate::repository::{
    CategoriesRepository, RecipeDetailsRepository, RecipesRepository, SavedRecipesRepository,
    SharedFavoritesStore,
};
use crate::storage::SqliteFavorites;
use crate::Config;

/// Owner of the repositories and factory for view-models.
pub struct AppContainer {
    recipes_repository: RecipesRepository,
    details_repository: RecipeDetailsRepository,
    categories_repository: CategoriesRepository,
    saved_recipes_repository: SavedRecipesRepository,
}

impl AppContainer {
    /// Builds the production container from configuration: an HTTP-backed
    /// remote collaborator and a SQLite favorites store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// database cannot be opened.
    pub fn new(config: &Config) -> Result<Self> {
        let api: Arc<dyn RecipeApi> =
            Arc::new(MealDbClient::new(&config.base_url, &config.api_key)?);
        let store: SharedFavoritesStore =
            Arc::new(Mutex::new(Box::new(SqliteFavorites::open(&config.db_path)?)));

        Ok(Self::with_collaborators(api, store))
    }

    /// Builds a container over explicit collaborators.
    ///
    /// This is the seam tests use to substitute a stubbed remote source or an
    /// in-memory store.
    #[must_use]
    pub fn with_collaborators(api: Arc<dyn RecipeApi>, store: SharedFavoritesStore) -> Self {
        Self {
            recipes_repository: RecipesRepository::new(Arc::clone(&api)),
            details_repository: RecipeDetailsRepository::new(Arc::clone(&api)),
            categories_repository: CategoriesRepository::new(api),
            saved_recipes_repository: SavedRecipesRepository::new(store),
        }
    }

    /// Creates a recipe view-model wired to this container's repositories.
    #[must_use]
    pub fn viewmodel(&self) -> ForkTalesViewModel {
        ForkTalesViewModel::new(
            self.recipes_repository.clone(),
            self.details_repository.clone(),
            self.categories_repository.clone(),
            self.saved_recipes_repository.clone(),
        )
    }

    /// Creates a login view-model with the application's built-in credential
    /// policy.
    #[must_use]
    pub fn login(&self) -> LoginViewModel {
        LoginViewModel::new(Arc::new(StaticCredentials::default()))
    }
}
