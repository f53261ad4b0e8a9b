//! SQLite-backed favorites store.
//!
//! Persists favorites in a single `favorite_recipes` table inside an embedded
//! SQLite database. The schema is created idempotently on open, insert uses
//! `INSERT OR IGNORE` for conflict-free idempotent adds, and an in-memory
//! constructor backs the test suites.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::error::Result;
use crate::storage::backend::FavoritesStore;
use crate::storage::models::FavoriteRecord;

/// Embedded SQLite favorites store.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`; callers share it behind a mutex, which
/// also serializes writes as the persistence contract assumes.
pub struct SqliteFavorites {
    conn: Connection,
}

impl SqliteFavorites {
    /// Opens (or creates) the database at the given path.
    ///
    /// Parent directories are created automatically and the schema is applied
    /// if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the file
    /// cannot be opened, or the schema statement fails.
    pub fn open(db_path: &Path) -> Result<Self> {
        tracing::debug!(path = ?db_path, "opening favorites database");

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens a fresh in-memory database. Used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema statement fails.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS favorite_recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                thumbnail TEXT NOT NULL,
                category TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<FavoriteRecord> {
        Ok(FavoriteRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            thumbnail: row.get(2)?,
            category: row.get(3)?,
        })
    }
}

impl FavoritesStore for SqliteFavorites {
    fn insert(&mut self, record: &FavoriteRecord) -> Result<()> {
        let _span = tracing::debug_span!("sqlite_insert_favorite", id = %record.id).entered();

        let inserted = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO favorite_recipes (id, name, thumbnail, category)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![record.id, record.name, record.thumbnail, record.category],
        )?;

        tracing::debug!(inserted = inserted > 0, "favorite insert complete");
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<FavoriteRecord>> {
        let _span = tracing::debug_span!("sqlite_get_favorite", id = %id).entered();

        let record = self
            .conn
            .query_row(
                "SELECT id, name, thumbnail, category FROM favorite_recipes WHERE id = ?1",
                params![id],
                Self::row_to_record,
            )
            .optional()?;

        tracing::debug!(found = record.is_some(), "favorite lookup complete");
        Ok(record)
    }

    fn get_all(&self) -> Result<Vec<FavoriteRecord>> {
        let _span = tracing::debug_span!("sqlite_get_all_favorites").entered();

        let mut stmt = self
            .conn
            .prepare("SELECT id, name, thumbnail, category FROM favorite_recipes")?;
        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = records.len(), "favorites retrieved");
        Ok(records)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("sqlite_remove_favorite", id = %id).entered();

        let removed = self
            .conn
            .execute("DELETE FROM favorite_recipes WHERE id = ?1", params![id])?;

        tracing::debug!(removed = removed > 0, "favorite removal complete");
        Ok(())
    }
}
