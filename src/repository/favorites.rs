//! Saved-recipes adapter over the favorites persistence collaborator.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::error::{ForkTalesError, Result};
use crate::domain::{Recipe, RecipeDetails};
use crate::storage::backend::FavoritesStore;
use crate::storage::models::FavoriteRecord;

/// Shared handle to a favorites store backend.
pub type SharedFavoritesStore = Arc<Mutex<Box<dyn FavoritesStore>>>;

/// Adapter passing favorites operations through to the persistence
/// collaborator.
///
/// The operations are async to honor the collaborator contract — every
/// persistence call is a suspension point for the caller — even though the
/// bundled SQLite backend completes synchronously. The store is shared behind
/// a mutex, which serializes writes; locks are never held across an await.
#[derive(Clone)]
pub struct SavedRecipesRepository {
    store: SharedFavoritesStore,
}

impl SavedRecipesRepository {
    /// Creates the adapter over a shared store handle.
    #[must_use]
    pub fn new(store: SharedFavoritesStore) -> Self {
        Self { store }
    }

    /// Fetches all saved recipes as list summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub async fn saved_recipes(&self) -> Result<Vec<Recipe>> {
        let records = self.lock()?.get_all()?;
        Ok(records.into_iter().map(FavoriteRecord::into_recipe).collect())
    }

    /// Saves the persisted subset of the given details as a favorite.
    ///
    /// Saving an already-saved identifier is a no-op (idempotent add).
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub async fn insert(&self, details: &RecipeDetails) -> Result<()> {
        self.lock()?.insert(&FavoriteRecord::from(details))
    }

    /// Fetches one saved recipe by identifier.
    ///
    /// Returns `Ok(None)` when the identifier is not saved — absence is a
    /// normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub async fn get(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self.lock()?.get(id)?.map(FavoriteRecord::into_recipe))
    }

    /// Removes one saved recipe by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.lock()?.remove(id)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Box<dyn FavoritesStore>>> {
        self.store
            .lock()
            .map_err(|_| ForkTalesError::Storage("favorites store lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteFavorites;

    fn repository() -> SavedRecipesRepository {
        let store = SqliteFavorites::open_in_memory().unwrap();
        SavedRecipesRepository::new(Arc::new(Mutex::new(Box::new(store))))
    }

    fn details(id: &str) -> RecipeDetails {
        RecipeDetails {
            id: id.to_string(),
            name: format!("recipe-{id}"),
            thumbnail: format!("https://example.com/{id}.jpg"),
            category: "Dessert".to_string(),
            instructions: "Not persisted.".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn save_then_lookup_round_trips_the_summary_fields() {
        let repository = repository();

        repository.insert(&details("7")).await.unwrap();

        let saved = repository.get("7").await.unwrap().unwrap();
        assert_eq!(saved.id, "7");
        assert_eq!(saved.name, "recipe-7");
        assert_eq!(saved.category, "Dessert");
    }

    #[tokio::test]
    async fn absent_favorite_is_none_while_list_is_empty() {
        let repository = repository();

        assert!(repository.get("7").await.unwrap().is_none());
        assert!(repository.saved_recipes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_flips_lookup_back_to_none() {
        let repository = repository();

        repository.insert(&details("7")).await.unwrap();
        repository.remove("7").await.unwrap();

        assert!(repository.get("7").await.unwrap().is_none());
    }
}
