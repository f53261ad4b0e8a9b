//! Concern orchestration: the view-model of the recipe screens.
//!
//! [`ForkTalesViewModel`] owns one [`StateCell`] per screen concern — recipe
//! list, recipe details, favorites list, search — plus the category list that
//! drives the recipe list. Its methods are the trigger operations of those
//! state machines; nothing else writes to the cells.
//!
//! # Failure policy
//!
//! Repository failures are caught here and collapsed into the affected
//! concern's `Error` state. They never propagate further up, never crash the
//! process, and are not retried. The transport/protocol distinction survives
//! only in the warning logs.
//!
//! # Reactive category dependency
//!
//! The category list has a single update entry point,
//! [`update_categories`](ForkTalesViewModel::update_categories), and every
//! update re-fetches the recipe list for the new category names. Fetching the
//! categories from the remote goes through the same entry point, so the
//! dependency holds no matter where the new list came from.

use tokio::sync::watch;

use crate::app::cell::StateCell;
use crate::app::state::{FavoritesState, RecipeDetailsState, RecipeListState, SearchState};
use crate::domain::error::ForkTalesError;
use crate::domain::{Category, RecipeDetails};
use crate::repository::{
    CategoriesRepository, RecipeDetailsRepository, RecipesRepository, SavedRecipesRepository,
};

/// Reactive state holder for the recipe screens.
///
/// All methods take `&self`; the cells provide interior mutability and keep
/// the single-writer invariant per concern. Superseded fetches are detected
/// through the cells' generation counters and their late results discarded.
pub struct ForkTalesViewModel {
    recipes_repository: RecipesRepository,
    details_repository: RecipeDetailsRepository,
    categories_repository: CategoriesRepository,
    saved_recipes_repository: SavedRecipesRepository,

    recipe_list: StateCell<RecipeListState>,
    recipe_details: StateCell<RecipeDetailsState>,
    favorites: StateCell<FavoritesState>,
    search: StateCell<SearchState>,
    categories: StateCell<Vec<Category>>,
}

impl ForkTalesViewModel {
    /// Creates the view-model over the four repository adapters.
    ///
    /// List-shaped concerns start in `Loading`, search starts in `Empty`, and
    /// the category list starts empty — call [`init`](Self::init) to populate
    /// them.
    #[must_use]
    pub fn new(
        recipes_repository: RecipesRepository,
        details_repository: RecipeDetailsRepository,
        categories_repository: CategoriesRepository,
        saved_recipes_repository: SavedRecipesRepository,
    ) -> Self {
        Self {
            recipes_repository,
            details_repository,
            categories_repository,
            saved_recipes_repository,
            recipe_list: StateCell::new(RecipeListState::default()),
            recipe_details: StateCell::new(RecipeDetailsState::default()),
            favorites: StateCell::new(FavoritesState::default()),
            search: StateCell::new(SearchState::default()),
            categories: StateCell::new(Vec::new()),
        }
    }

    /// Startup sequence: fetch the category list once (which re-fetches the
    /// recipe list through the reactive dependency) and refresh the favorites
    /// concern.
    pub async fn init(&self) {
        self.refresh_categories().await;
        self.refresh_favorites().await;
    }

    // --- snapshots and subscriptions -------------------------------------

    /// Snapshot of the recipe list concern.
    #[must_use]
    pub fn recipe_list_state(&self) -> RecipeListState {
        self.recipe_list.get()
    }

    /// Subscribes to recipe list state changes.
    #[must_use]
    pub fn subscribe_recipe_list(&self) -> watch::Receiver<RecipeListState> {
        self.recipe_list.subscribe()
    }

    /// Snapshot of the recipe details concern.
    #[must_use]
    pub fn recipe_details_state(&self) -> RecipeDetailsState {
        self.recipe_details.get()
    }

    /// Subscribes to recipe details state changes.
    #[must_use]
    pub fn subscribe_recipe_details(&self) -> watch::Receiver<RecipeDetailsState> {
        self.recipe_details.subscribe()
    }

    /// Snapshot of the favorites list concern.
    #[must_use]
    pub fn favorites_state(&self) -> FavoritesState {
        self.favorites.get()
    }

    /// Subscribes to favorites list state changes.
    #[must_use]
    pub fn subscribe_favorites(&self) -> watch::Receiver<FavoritesState> {
        self.favorites.subscribe()
    }

    /// Snapshot of the search concern.
    #[must_use]
    pub fn search_state(&self) -> SearchState {
        self.search.get()
    }

    /// Subscribes to search state changes.
    #[must_use]
    pub fn subscribe_search(&self) -> watch::Receiver<SearchState> {
        self.search.subscribe()
    }

    /// Snapshot of the current category list.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.categories.get()
    }

    /// Subscribes to category list changes.
    #[must_use]
    pub fn subscribe_categories(&self) -> watch::Receiver<Vec<Category>> {
        self.categories.subscribe()
    }

    // --- trigger operations ----------------------------------------------

    /// Fetches the category list from the remote source.
    ///
    /// On success the list flows through [`update_categories`](Self::update_categories).
    /// On failure the current list is kept unchanged and the failure is only
    /// logged — the category concern has no error variant to surface.
    pub async fn refresh_categories(&self) {
        match self.categories_repository.categories().await {
            Ok(categories) => self.update_categories(categories).await,
            Err(e) => {
                tracing::warn!(error = %e, "category fetch failed; keeping current list");
            }
        }
    }

    /// Replaces the category list and re-fetches the recipe list for the new
    /// category names.
    ///
    /// This is the category concern's single update entry point; the recipe
    /// list re-fetch is the reactive dependency, not a caller obligation.
    pub async fn update_categories(&self, categories: Vec<Category>) {
        let names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
        self.categories.set(categories);
        self.fetch_recipes_by_categories(&names).await;
    }

    /// Fetches recipe summaries for every given category and concatenates the
    /// results.
    ///
    /// Categories are fetched sequentially in the order supplied. On any
    /// failure the concern moves to `Error` and results already fetched for
    /// this call are discarded.
    pub async fn fetch_recipes_by_categories(&self, categories: &[String]) {
        let generation = self.recipe_list.begin();
        self.recipe_list.publish(generation, RecipeListState::Loading);

        let outcome = async {
            let mut all = Vec::new();
            for category in categories {
                all.extend(self.recipes_repository.recipes_by_category(category).await?);
            }
            Ok::<_, ForkTalesError>(all)
        }
        .await;

        match outcome {
            Ok(recipes) => {
                tracing::debug!(count = recipes.len(), "recipe list updated");
                self.recipe_list.publish(generation, RecipeListState::Success(recipes));
            }
            Err(e) => {
                tracing::warn!(error = %e, "recipe list fetch failed");
                self.recipe_list.publish(generation, RecipeListState::Error);
            }
        }
    }

    /// Fetches the details of one recipe and derives its favorite flag.
    pub async fn fetch_details_by_id(&self, id: &str) {
        let generation = self.recipe_details.begin();
        self.recipe_details.publish(generation, RecipeDetailsState::Loading);

        let outcome = async {
            let details = self.details_repository.details_by_id(id).await?;
            let is_favorite = self.saved_recipes_repository.get(id).await?.is_some();
            Ok::<_, ForkTalesError>((details, is_favorite))
        }
        .await;

        self.publish_details_outcome(generation, outcome);
    }

    /// Fetches one random recipe's details and derives its favorite flag.
    pub async fn fetch_random_details(&self) {
        let generation = self.recipe_details.begin();
        self.recipe_details.publish(generation, RecipeDetailsState::Loading);

        let outcome = async {
            let details = self.details_repository.random().await?;
            let is_favorite = self
                .saved_recipes_repository
                .get(&details.id)
                .await?
                .is_some();
            Ok::<_, ForkTalesError>((details, is_favorite))
        }
        .await;

        self.publish_details_outcome(generation, outcome);
    }

    /// Shows details that are already in hand, skipping the network.
    ///
    /// Navigation from a list screen has the full object available; only the
    /// favorite flag is looked up.
    pub async fn show_details(&self, details: RecipeDetails) {
        let generation = self.recipe_details.begin();

        match self.saved_recipes_repository.get(&details.id).await {
            Ok(saved) => {
                self.recipe_details.publish(
                    generation,
                    RecipeDetailsState::Success {
                        details,
                        is_favorite: saved.is_some(),
                    },
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "favorite lookup failed");
                self.recipe_details.publish(generation, RecipeDetailsState::Error);
            }
        }
    }

    /// Searches recipes by free text.
    ///
    /// An empty or whitespace-only query moves the concern to `Empty` without
    /// issuing a remote call. A query that matches nothing is `Success` with
    /// an empty list, not an error.
    pub async fn search(&self, query: &str) {
        let generation = self.search.begin();

        if query.trim().is_empty() {
            self.search.publish(generation, SearchState::Empty);
            return;
        }

        self.search.publish(generation, SearchState::Loading);

        match self.details_repository.search(query).await {
            Ok(results) => {
                self.search.publish(generation, SearchState::Success(results));
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.search.publish(generation, SearchState::Error);
            }
        }
    }

    /// Saves a favorite, refreshes the favorites concern, and re-derives the
    /// details concern with the flipped flag.
    ///
    /// The re-derivation uses the details already in hand — the write is
    /// durable, so the displayed flag cannot desynchronize from it.
    pub async fn save_favorite(&self, details: &RecipeDetails) {
        if let Err(e) = self.saved_recipes_repository.insert(details).await {
            tracing::warn!(error = %e, id = %details.id, "saving favorite failed");
            self.recipe_details.set(RecipeDetailsState::Error);
            return;
        }

        self.refresh_favorites().await;
        self.recipe_details.set(RecipeDetailsState::Success {
            details: details.clone(),
            is_favorite: true,
        });
    }

    /// Removes a favorite, refreshes the favorites concern, and re-derives the
    /// details concern with the flipped flag.
    pub async fn remove_favorite(&self, details: &RecipeDetails) {
        if let Err(e) = self.saved_recipes_repository.remove(&details.id).await {
            tracing::warn!(error = %e, id = %details.id, "removing favorite failed");
            self.recipe_details.set(RecipeDetailsState::Error);
            return;
        }

        self.refresh_favorites().await;
        self.recipe_details.set(RecipeDetailsState::Success {
            details: details.clone(),
            is_favorite: false,
        });
    }

    /// Reloads the favorites concern from the store.
    pub async fn refresh_favorites(&self) {
        let generation = self.favorites.begin();
        self.favorites.publish(generation, FavoritesState::Loading);

        match self.saved_recipes_repository.saved_recipes().await {
            Ok(recipes) => {
                self.favorites.publish(generation, FavoritesState::Success(recipes));
            }
            Err(e) => {
                tracing::warn!(error = %e, "favorites refresh failed");
                self.favorites.publish(generation, FavoritesState::Error);
            }
        }
    }

    fn publish_details_outcome(
        &self,
        generation: u64,
        outcome: Result<(RecipeDetails, bool), ForkTalesError>,
    ) {
        match outcome {
            Ok((details, is_favorite)) => {
                self.recipe_details.publish(
                    generation,
                    RecipeDetailsState::Success {
                        details,
                        is_favorite,
                    },
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "details fetch failed");
                self.recipe_details.publish(generation, RecipeDetailsState::Error);
            }
        }
    }
}
