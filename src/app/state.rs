//! Per-concern UI state machines.
//!
//! One sealed enum per independently-tracked piece of UI state. Exactly one
//! variant is active per concern at any time; a trigger operation moves the
//! concern to `Loading` before its fetch and to `Success`/`Error` after fetch
//! completion, never interleaved. Consumers match exhaustively, so adding a
//! variant is a compile-visible change at every rendering site.
//!
//! Transport and protocol failures both collapse into the `Error` variant of
//! the affected concern — the distinction is logged, not rendered.

use crate::domain::{Recipe, RecipeDetails};

/// State of the recipe list concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecipeListState {
    /// A fetch is in flight.
    #[default]
    Loading,

    /// The concatenated recipe summaries of every requested category.
    Success(Vec<Recipe>),

    /// The fetch failed; partial results were discarded.
    Error,
}

/// State of the recipe details concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecipeDetailsState {
    /// A fetch is in flight.
    #[default]
    Loading,

    /// Details plus the freshly derived favorite flag.
    Success {
        details: RecipeDetails,
        is_favorite: bool,
    },

    /// The fetch or the favorite lookup failed.
    Error,
}

/// State of the favorites list concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FavoritesState {
    /// A refresh is in flight.
    #[default]
    Loading,

    /// All locally saved recipes, as list summaries.
    Success(Vec<Recipe>),

    /// Reading the favorites store failed.
    Error,
}

/// State of the search concern.
///
/// Unlike the other concerns, search has a resting state: [`Empty`] means no
/// query has been issued, which is distinct from a completed search that
/// matched nothing — the latter is `Success` with an empty list.
///
/// [`Empty`]: SearchState::Empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No query issued yet (or the query was cleared). Never triggers a fetch.
    #[default]
    Empty,

    /// A search is in flight.
    Loading,

    /// Search results. May be empty — "no results", not an error.
    Success(Vec<RecipeDetails>),

    /// The search failed.
    Error,
}
