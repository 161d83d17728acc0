//! Store layer over `LexDb`.
//!
//! `LexStore` owns the database handle. The term, rule, and statistics
//! queries are implemented as `impl LexStore` blocks in `repos/`.

use crate::LexDb;
use crate::error::DatabaseError;

/// The term store and rule store behind one libSQL connection.
pub struct LexStore {
    db: LexDb,
}

impl LexStore {
    /// Open (or create) a local store.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, migrated, or seeded.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LexDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Wrap an already-opened database.
    #[must_use]
    pub const fn from_db(db: LexDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LexDb {
        &self.db
    }

    /// The path the store was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        self.db.path()
    }
}
