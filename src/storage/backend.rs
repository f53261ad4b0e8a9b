//! Storage backend abstraction.
//!
//! This module defines the [`FavoritesStore`] trait that abstracts over the
//! favorites persistence backend. The trait is minimal and maps one-to-one to
//! the operations the application performs against its single table; it is not
//! a generic ORM.
//!
//! Absence is never an error here: [`get`](FavoritesStore::get) returns
//! `Ok(None)` for an unknown identifier, distinct from
//! [`get_all`](FavoritesStore::get_all) returning an empty list.

use crate::domain::error::Result;
use crate::storage::models::FavoriteRecord;

/// Abstraction over the favorites persistence backend.
///
/// Implementations serialize their own writes; callers share a store behind a
/// mutex and never interleave operations.
///
/// # Implementations
///
/// - [`SqliteFavorites`](crate::storage::SqliteFavorites): embedded SQLite
///   database (default)
pub trait FavoritesStore: Send {
    /// Inserts a favorite, ignoring the insert if the identifier already exists.
    ///
    /// This gives favorite-add its idempotence: inserting the same identifier
    /// twice leaves exactly one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn insert(&mut self, record: &FavoriteRecord) -> Result<()>;

    /// Fetches one favorite by identifier.
    ///
    /// Returns `Ok(None)` if no row exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get(&self, id: &str) -> Result<Option<FavoriteRecord>>;

    /// Fetches all favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_all(&self) -> Result<Vec<FavoriteRecord>>;

    /// Deletes one favorite by identifier.
    ///
    /// Deleting an identifier that has no row is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self, id: &str) -> Result<()>;
}
