//! Default rule set installed when a database is first created.
//!
//! Seeding is an explicit step of `LexDb::open_local`, guarded by a marker row
//! in `store_meta`. A database that already holds rules but predates the
//! marker is marked without inserting anything.

use chrono::Utc;

use lex_core::enums::{RuleType, Severity};

use crate::LexDb;
use crate::error::DatabaseError;

/// `store_meta` key recording when the default rules were installed.
pub const SEEDED_AT_KEY: &str = "seeded_at";

/// One built-in style rule.
#[derive(Debug, Clone)]
pub struct SeedRule {
    pub language: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub rule_type: RuleType,
    pub severity: Severity,
    pub description: &'static str,
}

/// The six rules every new database starts with.
pub const DEFAULT_RULES: [SeedRule; 6] = [
    SeedRule {
        language: "en",
        pattern: r"\blogin\b",
        replacement: "sign in",
        rule_type: RuleType::PreferredSynonym,
        severity: Severity::Warning,
        description: "Prefer \"sign in\" over \"login\"",
    },
    SeedRule {
        language: "en",
        pattern: r"\bLogout\b",
        replacement: "Sign out",
        rule_type: RuleType::PreferredSynonym,
        severity: Severity::Warning,
        description: "Prefer \"Sign out\" over \"Logout\"",
    },
    SeedRule {
        language: "en",
        pattern: r"\be-mail\b",
        replacement: "email",
        rule_type: RuleType::PreferredSynonym,
        severity: Severity::Warning,
        description: "Use \"email\" without hyphen",
    },
    SeedRule {
        language: "en",
        pattern: r"\bOk\b",
        replacement: "OK",
        rule_type: RuleType::PreferredSynonym,
        severity: Severity::Info,
        description: "Use \"OK\" in all caps",
    },
    SeedRule {
        language: "jp",
        pattern: "ログイン",
        replacement: "サインイン",
        rule_type: RuleType::PreferredSynonym,
        severity: Severity::Warning,
        description: "Use \"サインイン\" instead of \"ログイン\"",
    },
    SeedRule {
        language: "jp",
        pattern: "ログアウト",
        replacement: "サインアウト",
        rule_type: RuleType::PreferredSynonym,
        severity: Severity::Warning,
        description: "Use \"サインアウト\" instead of \"ログアウト\"",
    },
];

impl LexDb {
    /// Install the default rules if this database has never been seeded.
    ///
    /// Returns `true` when rules were inserted.
    pub(crate) async fn seed_defaults(&self) -> Result<bool, DatabaseError> {
        if self.meta_value(SEEDED_AT_KEY).await?.is_some() {
            return Ok(false);
        }

        let mut rows = self.conn.query("SELECT COUNT(*) FROM rules", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let existing = row.get::<i64>(0)?;

        let now = Utc::now().to_rfc3339();
        let tx = self
            .conn
            .transaction()
            .await
            .map_err(|e| DatabaseError::Migration(format!("seed transaction: {e}")))?;

        if existing == 0 {
            for rule in &DEFAULT_RULES {
                tx.execute(
                    "INSERT INTO rules (language, pattern, replacement, rule_type, severity, description, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    libsql::params![
                        rule.language,
                        rule.pattern,
                        rule.replacement,
                        rule.rule_type.as_str(),
                        rule.severity.as_str(),
                        rule.description,
                        now.as_str()
                    ],
                )
                .await
                .map_err(|e| DatabaseError::Migration(format!("seed rule '{}': {e}", rule.pattern)))?;
            }
        } else {
            tracing::info!(existing, "rules already present; marking database as seeded");
        }

        tx.execute(
            "INSERT INTO store_meta (key, value) VALUES (?1, ?2)",
            libsql::params![SEEDED_AT_KEY, now.as_str()],
        )
        .await?;
        tx.commit()
            .await
            .map_err(|e| DatabaseError::Migration(format!("seed commit: {e}")))?;

        Ok(existing == 0)
    }

    /// Read one `store_meta` value.
    pub(crate) async fn meta_value(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT value FROM store_meta WHERE key = ?1", [key])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }
}
