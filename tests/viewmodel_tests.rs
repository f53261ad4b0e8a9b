//! View-model integration tests over stub collaborators.
//!
//! The remote source is a programmable [`StubApi`]; persistence is the real
//! SQLite backend opened in memory. Everything runs through the container so
//! the adapters are exercised too.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use forktales::app::{FavoritesState, RecipeDetailsState, RecipeListState, SearchState};
use forktales::domain::error::ForkTalesError;
use forktales::domain::{RecipeDetails, Result};
use forktales::network::api::RecipeApi;
use forktales::network::responses::{
    CategoriesResponse, CategoryWire, MealWire, RecipeDetailsResponse, RecipeSummaryWire,
    RecipesResponse,
};
use forktales::repository::SharedFavoritesStore;
use forktales::storage::SqliteFavorites;
use forktales::AppContainer;

/// Programmable stub for the remote collaborator.
///
/// Categories, per-category summaries, details, and search hits are fixed at
/// construction; calls are counted so tests can assert which endpoints were
/// (not) hit. Categories listed in `failing` answer with a transport error.
/// Categories listed in `gated` block until [`release`](Self::release) to let
/// tests interleave a superseding fetch.
#[derive(Default)]
struct StubApi {
    categories: Vec<String>,
    recipes: HashMap<String, Vec<(String, String)>>,
    details: HashMap<String, String>,
    search_hits: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    gated: HashSet<String>,
    gate_entered: Notify,
    gate_release: Notify,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl StubApi {
    fn with_recipes(recipes: &[(&str, &[(&str, &str)])]) -> Self {
        Self {
            recipes: recipes
                .iter()
                .map(|(category, items)| {
                    (
                        (*category).to_string(),
                        items
                            .iter()
                            .map(|(id, name)| ((*id).to_string(), (*name).to_string()))
                            .collect(),
                    )
                })
                .collect(),
            ..Self::default()
        }
    }

    fn failing_on(mut self, category: &str) -> Self {
        self.failing.insert(category.to_string());
        self
    }

    fn gated_on(mut self, category: &str) -> Self {
        self.gated.insert(category.to_string());
        self
    }

    fn with_categories(mut self, names: &[&str]) -> Self {
        self.categories = names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    fn with_details(mut self, id: &str, name: &str) -> Self {
        self.details.insert(id.to_string(), name.to_string());
        self
    }

    fn with_search_hit(mut self, query: &str, names: &[&str]) -> Self {
        self.search_hits.insert(
            query.to_string(),
            names.iter().map(|n| (*n).to_string()).collect(),
        );
        self
    }

    /// Waits until a gated fetch has entered the stub.
    async fn entered(&self) {
        self.gate_entered.notified().await;
    }

    /// Releases one gated fetch.
    fn release(&self) {
        self.gate_release.notify_one();
    }

    fn meal(id: &str, name: &str) -> MealWire {
        MealWire {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: format!("https://example.com/{id}.jpg"),
            category: Some("Wire".to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl RecipeApi for StubApi {
    async fn recipes_by_category(&self, category: &str) -> Result<RecipesResponse> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if self.gated.contains(category) {
            self.gate_entered.notify_one();
            self.gate_release.notified().await;
        }
        if self.failing.contains(category) {
            return Err(ForkTalesError::Transport("connection reset".to_string()));
        }

        let meals = self.recipes.get(category).map(|items| {
            items
                .iter()
                .map(|(id, name)| RecipeSummaryWire {
                    id: id.clone(),
                    name: name.clone(),
                    thumbnail: format!("https://example.com/{id}.jpg"),
                })
                .collect()
        });
        Ok(RecipesResponse { meals })
    }

    async fn recipe_details_by_id(&self, id: &str) -> Result<RecipeDetailsResponse> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let meals = self
            .details
            .get(id)
            .map(|name| vec![Self::meal(id, name)])
            .unwrap_or_default();
        Ok(RecipeDetailsResponse { meals: Some(meals) })
    }

    async fn random_recipe(&self) -> Result<RecipeDetailsResponse> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let meals = self
            .details
            .iter()
            .next()
            .map(|(id, name)| vec![Self::meal(id, name)]);
        Ok(RecipeDetailsResponse { meals })
    }

    async fn search_recipes(&self, query: &str) -> Result<RecipeDetailsResponse> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let meals = self.search_hits.get(query).map(|names| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Self::meal(&format!("s{i}"), name))
                .collect()
        });
        Ok(RecipeDetailsResponse { meals })
    }

    async fn categories(&self) -> Result<CategoriesResponse> {
        Ok(CategoriesResponse {
            categories: self
                .categories
                .iter()
                .map(|name| CategoryWire {
                    name: name.clone(),
                    thumbnail: String::new(),
                    description: String::new(),
                })
                .collect(),
        })
    }
}

fn memory_store() -> SharedFavoritesStore {
    Arc::new(Mutex::new(Box::new(SqliteFavorites::open_in_memory().unwrap())))
}

fn container(api: Arc<StubApi>) -> AppContainer {
    AppContainer::with_collaborators(api, memory_store())
}

fn details(id: &str, name: &str) -> RecipeDetails {
    RecipeDetails {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: format!("https://example.com/{id}.jpg"),
        category: "Seafood".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn multi_category_fetch_unions_results_and_stamps_each_category() {
    let api = Arc::new(StubApi::with_recipes(&[
        ("Seafood", &[("1", "Sushi"), ("2", "Paella")]),
        ("Dessert", &[("3", "Tiramisu")]),
    ]));
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel
        .fetch_recipes_by_categories(&["Seafood".to_string(), "Dessert".to_string()])
        .await;

    let RecipeListState::Success(recipes) = viewmodel.recipe_list_state() else {
        panic!("expected success state");
    };
    assert_eq!(recipes.len(), 3);
    // Stamped with the requesting category even though the wire said "Wire".
    assert!(recipes
        .iter()
        .filter(|r| ["1", "2"].contains(&r.id.as_str()))
        .all(|r| r.category == "Seafood"));
    assert!(recipes.iter().any(|r| r.id == "3" && r.category == "Dessert"));
}

#[tokio::test]
async fn any_category_failure_discards_partial_results() {
    let api = Arc::new(
        StubApi::with_recipes(&[("Seafood", &[("1", "Sushi")])]).failing_on("Dessert"),
    );
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel
        .fetch_recipes_by_categories(&["Seafood".to_string(), "Dessert".to_string()])
        .await;

    assert_eq!(viewmodel.recipe_list_state(), RecipeListState::Error);
    // The first category was fetched before the failure and still discarded.
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn initialization_fetches_recipes_for_every_listed_category() {
    // Stub: two categories, two items for Seafood, none for Dessert.
    let api = Arc::new(
        StubApi::with_recipes(&[("Seafood", &[("1", "Sushi"), ("2", "Paella")])])
            .with_categories(&["Seafood", "Dessert"]),
    );
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel.init().await;

    assert_eq!(viewmodel.categories().len(), 2);
    let RecipeListState::Success(recipes) = viewmodel.recipe_list_state() else {
        panic!("expected success state");
    };
    assert_eq!(recipes.len(), 2);
    assert!(recipes.iter().all(|r| r.category == "Seafood"));
    assert_eq!(viewmodel.favorites_state(), FavoritesState::Success(vec![]));
}

#[tokio::test]
async fn empty_query_is_the_empty_state_and_never_calls_the_remote() {
    let api = Arc::new(StubApi::default());
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel.search("").await;
    assert_eq!(viewmodel.search_state(), SearchState::Empty);

    viewmodel.search("   ").await;
    assert_eq!(viewmodel.search_state(), SearchState::Empty);

    assert_eq!(api.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn no_hit_search_is_success_with_empty_list_not_error() {
    let api = Arc::new(StubApi::default());
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel.search("unheard-of dish").await;

    assert_eq!(viewmodel.search_state(), SearchState::Success(vec![]));
    assert_eq!(api.search_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn search_hits_come_back_in_success() {
    let api = Arc::new(StubApi::default().with_search_hit("sushi", &["Sushi", "Sushi Rolls"]));
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel.search("sushi").await;

    let SearchState::Success(results) = viewmodel.search_state() else {
        panic!("expected success state");
    };
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn details_fetch_derives_the_favorite_flag_from_the_store() {
    let api = Arc::new(StubApi::default().with_details("1", "Sushi"));
    let container = container(Arc::clone(&api));
    let viewmodel = container.viewmodel();

    viewmodel.fetch_details_by_id("1").await;
    let RecipeDetailsState::Success { is_favorite, .. } = viewmodel.recipe_details_state() else {
        panic!("expected success state");
    };
    assert!(!is_favorite);

    viewmodel.save_favorite(&details("1", "Sushi")).await;
    viewmodel.fetch_details_by_id("1").await;
    let RecipeDetailsState::Success { is_favorite, .. } = viewmodel.recipe_details_state() else {
        panic!("expected success state");
    };
    assert!(is_favorite);
}

#[tokio::test]
async fn show_details_uses_the_in_hand_object_without_network() {
    let api = Arc::new(StubApi::default());
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel.show_details(details("9", "Paella")).await;

    let RecipeDetailsState::Success {
        details: shown,
        is_favorite,
    } = viewmodel.recipe_details_state()
    else {
        panic!("expected success state");
    };
    assert_eq!(shown.id, "9");
    assert!(!is_favorite);
    assert_eq!(api.detail_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn random_fetch_lands_in_the_details_concern() {
    let api = Arc::new(StubApi::default().with_details("7", "Paella"));
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel.fetch_random_details().await;

    let RecipeDetailsState::Success {
        details: shown,
        is_favorite,
    } = viewmodel.recipe_details_state()
    else {
        panic!("expected success state");
    };
    assert_eq!(shown.id, "7");
    assert!(!is_favorite);
}

#[tokio::test]
async fn unknown_id_lookup_collapses_to_the_error_state() {
    let api = Arc::new(StubApi::default());
    let viewmodel = container(Arc::clone(&api)).viewmodel();

    viewmodel.fetch_details_by_id("missing").await;

    assert_eq!(viewmodel.recipe_details_state(), RecipeDetailsState::Error);
}

#[tokio::test]
async fn save_and_remove_flip_the_flag_and_refresh_the_favorites_list() {
    let api = Arc::new(StubApi::default());
    let viewmodel = container(Arc::clone(&api)).viewmodel();
    let sushi = details("1", "Sushi");

    viewmodel.save_favorite(&sushi).await;

    let RecipeDetailsState::Success { is_favorite, .. } = viewmodel.recipe_details_state() else {
        panic!("expected success state");
    };
    assert!(is_favorite);
    let FavoritesState::Success(saved) = viewmodel.favorites_state() else {
        panic!("expected success state");
    };
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, "1");

    viewmodel.remove_favorite(&sushi).await;

    let RecipeDetailsState::Success { is_favorite, .. } = viewmodel.recipe_details_state() else {
        panic!("expected success state");
    };
    assert!(!is_favorite);
    assert_eq!(viewmodel.favorites_state(), FavoritesState::Success(vec![]));
}

#[tokio::test]
async fn saving_the_same_favorite_twice_keeps_one_row() {
    let api = Arc::new(StubApi::default());
    let viewmodel = container(Arc::clone(&api)).viewmodel();
    let sushi = details("1", "Sushi");

    viewmodel.save_favorite(&sushi).await;
    viewmodel.save_favorite(&sushi).await;

    let FavoritesState::Success(saved) = viewmodel.favorites_state() else {
        panic!("expected success state");
    };
    assert_eq!(saved.len(), 1);
}

#[tokio::test]
async fn subscribers_are_notified_of_concern_changes() {
    let api = Arc::new(StubApi::with_recipes(&[("Seafood", &[("1", "Sushi")])]));
    let viewmodel = container(Arc::clone(&api)).viewmodel();
    let mut rx = viewmodel.subscribe_recipe_list();

    viewmodel
        .fetch_recipes_by_categories(&["Seafood".to_string()])
        .await;

    rx.changed().await.unwrap();
    assert!(matches!(&*rx.borrow(), RecipeListState::Success(r) if r.len() == 1));
}

#[tokio::test]
async fn a_superseded_fetch_cannot_clobber_the_newer_result() {
    let api = Arc::new(
        StubApi::with_recipes(&[
            ("Slow", &[("1", "Stale")]),
            ("Fast", &[("2", "Fresh")]),
        ])
        .gated_on("Slow"),
    );
    let viewmodel = Arc::new(container(Arc::clone(&api)).viewmodel());

    let slow = {
        let viewmodel = Arc::clone(&viewmodel);
        tokio::spawn(async move {
            viewmodel
                .fetch_recipes_by_categories(&["Slow".to_string()])
                .await;
        })
    };
    api.entered().await;

    // The newer fetch completes while the first is still blocked.
    viewmodel
        .fetch_recipes_by_categories(&["Fast".to_string()])
        .await;

    api.release();
    slow.await.unwrap();

    let RecipeListState::Success(recipes) = viewmodel.recipe_list_state() else {
        panic!("expected success state");
    };
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, "2");
}
