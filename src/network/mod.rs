//! Remote API layer: the HTTP collaborator and its wire formats.
//!
//! # Modules
//!
//! - [`api`]: The [`RecipeApi`] collaborator seam and its HTTP implementation
//! - [`responses`]: Wire-format envelopes, kept separate from domain models

pub mod api;
pub mod responses;

pub use api::{MealDbClient, RecipeApi, DEFAULT_API_KEY, DEFAULT_BASE_URL};
pub use responses::{CategoriesResponse, RecipeDetailsResponse, RecipesResponse};
