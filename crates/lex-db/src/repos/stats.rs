//! Store-wide counts.

use std::collections::BTreeMap;

use lex_core::responses::StoreStatistics;

use crate::error::DatabaseError;
use crate::helpers::get_count;
use crate::store::LexStore;

impl LexStore {
    /// Summarize the store: totals, per-language counts, and import files.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any count query fails.
    pub async fn statistics(&self) -> Result<StoreStatistics, DatabaseError> {
        let terms_by_language = self
            .grouped_counts("SELECT source_lang, COUNT(*) FROM terms GROUP BY source_lang")
            .await?;
        let rules_by_language = self
            .grouped_counts("SELECT language, COUNT(*) FROM rules GROUP BY language")
            .await?;

        let mut source_files = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT source_file FROM terms
                 WHERE source_file IS NOT NULL AND source_file <> ''
                 ORDER BY source_file",
                (),
            )
            .await?;
        while let Some(row) = rows.next().await? {
            source_files.push(row.get::<String>(0)?);
        }

        Ok(StoreStatistics {
            total_terms: terms_by_language.values().sum(),
            total_rules: rules_by_language.values().sum(),
            terms_by_language,
            rules_by_language,
            source_files,
            database_path: self.path().to_string(),
        })
    }

    async fn grouped_counts(&self, sql: &str) -> Result<BTreeMap<String, u64>, DatabaseError> {
        let mut counts = BTreeMap::new();
        let mut rows = self.db().conn().query(sql, ()).await?;
        while let Some(row) = rows.next().await? {
            counts.insert(row.get::<String>(0)?, get_count(&row, 1)?);
        }
        Ok(counts)
    }
}
