//! Recipe category model.

use serde::{Deserialize, Serialize};

/// A recipe category offered by the remote source.
///
/// Categories are fetched once at startup and drive which recipe lists are
/// requested: the recipe-list concern re-fetches whenever the category list
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, e.g. `"Seafood"`. Used verbatim as the list-by-category
    /// request parameter.
    pub name: String,

    /// Thumbnail image URL.
    pub thumbnail: String,

    /// Human-readable description of the category.
    pub description: String,
}

impl Category {
    /// Creates a category with an empty thumbnail and description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            thumbnail: String::new(),
            description: String::new(),
        }
    }
}
