//! Wire-format response envelopes for the remote recipe API.
//!
//! These types mirror the remote JSON shapes exactly and are kept separate from
//! the domain models to maintain a clear boundary between wire representation
//! and business logic. Every envelope is unwrapped into domain types at the
//! repository boundary.
//!
//! # Envelope conventions
//!
//! The remote API wraps everything in a single-key object: `{"categories":
//! [...]}` for the category listing and `{"meals": [...]}` for everything else.
//! `meals` follows a zero-or-one convention for by-id and random lookups and
//! zero-or-more for filter and search. When a filter or search matches nothing
//! the API answers `{"meals": null}` — decoded here as an empty list, never as
//! an error.
//!
//! # Ingredient columns
//!
//! A full meal object carries its ingredient list as twenty flat column pairs
//! (`strIngredient1`..`strIngredient20` with matching `strMeasureN`), padded
//! with blanks or nulls. They are captured through a flattened map and folded
//! into ordered [`Ingredient`] pairs on conversion, dropping the padding.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{Category, Ingredient, Recipe, RecipeDetails, MAX_INGREDIENTS};

/// Envelope for the category listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesResponse {
    /// Listed categories. Defaults to empty when the key is absent.
    #[serde(default)]
    pub categories: Vec<CategoryWire>,
}

impl CategoriesResponse {
    /// Converts the envelope into domain categories.
    #[must_use]
    pub fn into_categories(self) -> Vec<Category> {
        self.categories.into_iter().map(CategoryWire::into_category).collect()
    }
}

/// One category as encoded on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryWire {
    #[serde(rename = "strCategory", default)]
    pub name: String,

    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: String,

    #[serde(rename = "strCategoryDescription", default)]
    pub description: String,
}

impl CategoryWire {
    fn into_category(self) -> Category {
        Category {
            name: self.name,
            thumbnail: self.thumbnail,
            description: self.description,
        }
    }
}

/// Envelope for the list-by-category endpoint.
///
/// Filter results carry only the summary triple (id, name, thumbnail); the
/// category is stamped onto each summary by the repository adapter, not taken
/// from the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipesResponse {
    /// Matched summaries; `null` on the wire means no match.
    #[serde(default)]
    pub meals: Option<Vec<RecipeSummaryWire>>,
}

impl RecipesResponse {
    /// Converts the envelope into domain summaries, treating `null` as empty.
    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .map(RecipeSummaryWire::into_recipe)
            .collect()
    }
}

/// One recipe summary as encoded on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeSummaryWire {
    #[serde(rename = "idMeal", default)]
    pub id: String,

    #[serde(rename = "strMeal", default)]
    pub name: String,

    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

impl RecipeSummaryWire {
    fn into_recipe(self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name,
            thumbnail: self.thumbnail,
            category: String::new(),
        }
    }
}

/// Envelope for the lookup, random, and search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeDetailsResponse {
    /// Matched meals; `null` on the wire means no match.
    #[serde(default)]
    pub meals: Option<Vec<MealWire>>,
}

impl RecipeDetailsResponse {
    /// Converts the envelope into domain details, treating `null` as empty.
    #[must_use]
    pub fn into_details(self) -> Vec<RecipeDetails> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .map(MealWire::into_details)
            .collect()
    }
}

/// One full meal object as encoded on the wire.
///
/// Known scalar columns are named explicitly; the twenty ingredient/measure
/// column pairs land in the flattened `columns` map and are extracted in order
/// during conversion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealWire {
    #[serde(rename = "idMeal", default)]
    pub id: String,

    #[serde(rename = "strMeal", default)]
    pub name: String,

    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,

    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,

    #[serde(rename = "strArea", default)]
    pub area: Option<String>,

    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,

    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,

    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,

    #[serde(rename = "strSource", default)]
    pub source: Option<String>,

    /// Remaining columns, notably `strIngredientN` and `strMeasureN`.
    #[serde(flatten)]
    pub columns: HashMap<String, Option<String>>,
}

impl MealWire {
    /// Converts the wire meal into domain details.
    ///
    /// Ingredient pairs are taken in column order (1 through 20); a pair whose
    /// ingredient name is blank or null is padding and is dropped. The
    /// comma-separated tag string is split into individual tags. Empty-string
    /// video and source references collapse to `None`.
    #[must_use]
    pub fn into_details(self) -> RecipeDetails {
        let mut ingredients = Vec::new();
        for slot in 1..=MAX_INGREDIENTS {
            let name = self.column_text(&format!("strIngredient{slot}"));
            if name.is_empty() {
                continue;
            }
            let measure = self.column_text(&format!("strMeasure{slot}"));
            ingredients.push(Ingredient {
                name: name.to_string(),
                measure: measure.to_string(),
            });
        }

        let tags = self
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect();

        RecipeDetails {
            id: self.id,
            name: self.name,
            thumbnail: self.thumbnail,
            category: self.category.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            tags,
            instructions: self.instructions.unwrap_or_default(),
            ingredients,
            youtube: self.youtube.filter(|url| !url.is_empty()),
            source: self.source.filter(|url| !url.is_empty()),
        }
    }

    /// Returns a trimmed column value, treating null and absent as empty.
    fn column_text(&self, key: &str) -> &str {
        self.columns
            .get(key)
            .and_then(Option::as_deref)
            .unwrap_or_default()
            .trim()
    }
}
