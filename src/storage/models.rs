//! Storage record models for the favorites persistence layer.
//!
//! This module defines the raw storage record type used for persistence
//! operations. It is separate from the domain models to maintain a clear
//! boundary between storage representation and business logic: exactly the
//! four columns of the favorites table, nothing more.

use serde::{Deserialize, Serialize};

use crate::domain::{Recipe, RecipeDetails};

/// One row of the favorites table.
///
/// A favorite is keyed by the recipe identifier and unique per identifier;
/// inserting an existing identifier is ignored, making favorite-add idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Recipe identifier, the table's primary key.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Thumbnail image URL.
    pub thumbnail: String,

    /// Category name the recipe carried when it was favorited.
    pub category: String,
}

impl FavoriteRecord {
    /// Converts the record into the summary shape used by list views.
    #[must_use]
    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name,
            thumbnail: self.thumbnail,
            category: self.category,
        }
    }
}

impl From<&RecipeDetails> for FavoriteRecord {
    /// Projects the persisted subset out of full recipe details.
    fn from(details: &RecipeDetails) -> Self {
        Self {
            id: details.id.clone(),
            name: details.name.clone(),
            thumbnail: details.thumbnail.clone(),
            category: details.category.clone(),
        }
    }
}
