//! Storage layer for persistent favorites.
//!
//! This module provides the persistence abstraction for locally saved
//! favorites: one table keyed by recipe identifier, with idempotent inserts
//! and non-erroring point lookups.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `sqlite`: Embedded SQLite implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod models;
pub mod sqlite;

pub use backend::FavoritesStore;
pub use models::FavoriteRecord;
pub use sqlite::SqliteFavorites;
