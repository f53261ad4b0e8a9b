//! Recipe domain models.
//!
//! This module defines the two recipe representations used by the client core:
//! the lightweight [`Recipe`] summary shown in lists, and the full
//! [`RecipeDetails`] shown on a detail screen. A summary's `category` field is
//! assigned by the repository adapter at fetch time — the remote source does not
//! reliably echo it back — and the four summary fields are exactly what gets
//! persisted when a recipe is favorited.

use serde::{Deserialize, Serialize};

/// Base URL for ingredient thumbnail images on the remote image host.
const INGREDIENT_IMAGE_BASE_URL: &str = "https://www.themealdb.com/images/ingredients/";

/// Upper bound on ingredient pairs carried by a recipe.
///
/// The wire format reserves exactly twenty `strIngredientN`/`strMeasureN`
/// column pairs; unused slots are padded with blanks and dropped on decode.
pub const MAX_INGREDIENTS: usize = 20;

/// A recipe summary as shown in list views.
///
/// Constructed on each list fetch and not persisted unless promoted to a
/// favorite. The `id` is the stable key across the remote API and the local
/// favorites store.
///
/// # Examples
///
/// ```
/// use forktales::domain::Recipe;
///
/// let recipe = Recipe::new("52772", "Teriyaki Chicken Casserole");
/// assert_eq!(recipe.id, "52772");
/// assert!(recipe.category.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier assigned by the remote source.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Thumbnail image URL.
    pub thumbnail: String,

    /// Category name. Stamped by the recipes repository adapter with the
    /// category that was requested, never trusted from the wire.
    pub category: String,
}

impl Recipe {
    /// Creates a recipe summary with an empty thumbnail and category.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: String::new(),
            category: String::new(),
        }
    }
}

/// One ingredient entry of a recipe: what to use and how much of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, e.g. `"soy sauce"`.
    pub name: String,

    /// Free-form measure, e.g. `"3/4 cup"`. May be empty.
    pub measure: String,
}

impl Ingredient {
    /// Returns the thumbnail image URL for this ingredient on the remote
    /// image host.
    ///
    /// # Examples
    ///
    /// ```
    /// use forktales::domain::Ingredient;
    ///
    /// let ingredient = Ingredient {
    ///     name: "Soy Sauce".to_string(),
    ///     measure: "3/4 cup".to_string(),
    /// };
    /// assert_eq!(
    ///     ingredient.image_url(),
    ///     "https://www.themealdb.com/images/ingredients/Soy Sauce.png"
    /// );
    /// ```
    #[must_use]
    pub fn image_url(&self) -> String {
        format!("{INGREDIENT_IMAGE_BASE_URL}{}.png", self.name)
    }
}

/// Full recipe details as shown on a detail screen.
///
/// Constructed on a detail fetch, a random fetch, or a search. When the user
/// favorites a recipe, only the [`summary`](Self::summary) projection of these
/// fields is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    /// Stable identifier assigned by the remote source.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Thumbnail image URL.
    pub thumbnail: String,

    /// Category name as reported by the remote source.
    pub category: String,

    /// Area / cuisine, e.g. `"Japanese"`.
    pub area: String,

    /// Free-form tags. The wire carries these as one comma-separated string;
    /// decode splits them into individual entries.
    pub tags: Vec<String>,

    /// Full preparation instructions.
    pub instructions: String,

    /// Ordered ingredient/measure pairs, at most [`MAX_INGREDIENTS`] of them.
    /// Blank padding slots from the wire are dropped.
    pub ingredients: Vec<Ingredient>,

    /// External video reference, when the remote source provides one.
    pub youtube: Option<String>,

    /// Source URL of the recipe, when the remote source provides one.
    pub source: Option<String>,
}

impl RecipeDetails {
    /// Projects the four persisted fields into a [`Recipe`] summary.
    ///
    /// This is the shape a favorite takes when re-listed on the favorites
    /// screen: identifier, name, thumbnail, and category.
    ///
    /// # Examples
    ///
    /// ```
    /// use forktales::domain::RecipeDetails;
    ///
    /// let details = RecipeDetails {
    ///     id: "52772".to_string(),
    ///     name: "Teriyaki Chicken Casserole".to_string(),
    ///     category: "Chicken".to_string(),
    ///     ..Default::default()
    /// };
    /// let summary = details.summary();
    /// assert_eq!(summary.id, "52772");
    /// assert_eq!(summary.category, "Chicken");
    /// ```
    #[must_use]
    pub fn summary(&self) -> Recipe {
        Recipe {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
            category: self.category.clone(),
        }
    }
}
