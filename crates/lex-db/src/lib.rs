//! # lex-db
//!
//! libSQL storage for Lexicon: the term store and the rule store.
//!
//! Holds all persisted state: source→target term pairs with metadata, and
//! regex style rules per language. Issues are never stored here; the
//! `find_*` queries produce them fresh from the stored records.
//!
//! Opening a database is self-healing: the parent directory, schema, and the
//! default rule set are created on first use. Re-opening never re-seeds.

pub mod error;
pub mod helpers;
pub mod inputs;
mod migrations;
pub mod repos;
pub mod seed;
pub mod store;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

/// Path that keeps the database in memory (tests, throwaway checks).
pub const IN_MEMORY: &str = ":memory:";

/// Central database handle for term and rule storage.
///
/// Wraps a libSQL database and its single connection.
pub struct LexDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    path: String,
}

impl LexDb {
    /// Open a local database at the given path, creating it if needed.
    ///
    /// Runs migrations and first-open seeding automatically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != IN_MEMORY {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let lex_db = Self {
            db,
            conn,
            path: path.to_string(),
        };
        lex_db.run_migrations().await?;
        let seeded = lex_db.seed_defaults().await?;
        if seeded {
            tracing::info!(path, "created term database with default rules");
        } else {
            tracing::debug!(path, "opened existing term database");
        }
        Ok(lex_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// The path this database was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
