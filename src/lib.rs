//! ForkTales: headless client core for a recipe browser.
//!
//! ForkTales lets an embedding surface (mobile screens, a CLI, tests) log in
//! with a checked credential pair, browse recipes fetched from a public recipe
//! web API, view recipe details, search recipes, and save favorites in a local
//! embedded database. This crate is the core behind those screens: domain
//! models, collaborator seams, repository adapters, and per-concern UI state
//! machines. Rendering and navigation are the embedder's business.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding surface (screens / CLI shim / tests)     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machines
//! │  - Concern state cells + subscriptions              │
//! │  - View-model trigger operations                    │
//! │  - Login state holder                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Repository Adapters (repository/)                  │  ← Shape adaptation
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌───────────────────┐
//! │ Network Layer     │        │ Storage Layer     │
//! │ (network/)        │        │ (storage/)        │
//! │ - RecipeApi seam  │        │ - FavoritesStore  │
//! │ - HTTP client     │        │ - SQLite backend  │
//! │ - Wire envelopes  │        │ - Record models   │
//! └───────────────────┘        └───────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Recipe / RecipeDetails / Category models         │
//! │  - Error taxonomy (transport / protocol / storage)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Concern state machines, view-model, login holder
//! - [`container`]: Process-wide dependency container
//! - [`domain`]: Core domain types and errors
//! - [`network`]: Remote API collaborator and wire formats
//! - [`repository`]: Thin adapters between view-model and collaborators
//! - [`storage`]: Favorites persistence layer
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use forktales::{initialize, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> forktales::domain::Result<()> {
//! let container = initialize(&Config::default())?;
//!
//! let viewmodel = container.viewmodel();
//! viewmodel.init().await;
//!
//! match viewmodel.recipe_list_state() {
//!     forktales::app::RecipeListState::Success(recipes) => {
//!         println!("{} recipes", recipes.len());
//!     }
//!     forktales::app::RecipeListState::Loading => println!("still loading"),
//!     forktales::app::RecipeListState::Error => println!("something went wrong"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod container;
pub mod domain;
pub mod network;
pub mod observability;
pub mod repository;
pub mod storage;

pub use app::{ForkTalesViewModel, LoginState, LoginViewModel};
pub use container::AppContainer;
pub use domain::{Category, ForkTalesError, Ingredient, Recipe, RecipeDetails, Result};

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::network::api::{DEFAULT_API_KEY, DEFAULT_BASE_URL};

/// Application configuration.
///
/// Loaded from a TOML file, assembled from a key/value map supplied by the
/// embedding surface, or taken as [`Default`]. All fields have working
/// defaults: the public remote API with its test key and a `forktales.db`
/// database in the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote recipe API, without the key segment.
    pub base_url: String,

    /// Path-embedded API key segment appended to the base URL.
    pub api_key: String,

    /// Location of the favorites database file.
    pub db_path: PathBuf,

    /// Tracing level for the subscriber, e.g. `"debug"`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            db_path: PathBuf::from("forktales.db"),
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ForkTalesError::Config(format!("invalid config file: {e}")))
    }

    /// Assembles configuration from a string key/value map.
    ///
    /// Recognized keys: `base_url`, `api_key`, `db_path`, `trace_level`.
    /// Unknown keys are ignored; missing keys fall back to their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use forktales::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "9973533".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_key, "9973533");
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: map.get("base_url").cloned().unwrap_or(defaults.base_url),
            api_key: map.get("api_key").cloned().unwrap_or(defaults.api_key),
            db_path: map
                .get("db_path")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            trace_level: map.get("trace_level").cloned(),
        }
    }
}

/// Initializes the core: tracing subscriber plus the dependency container.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or the favorites
/// database cannot be opened.
pub fn initialize(config: &Config) -> Result<AppContainer> {
    observability::init_tracing(config);
    tracing::debug!(base_url = %config.base_url, db_path = ?config.db_path, "initializing forktales core");
    AppContainer::new(config)
}
