//! On-disk store behaviour across re-opens.

use lex_core::enums::TermType;
use lex_db::inputs::{NewRule, NewTerm};
use lex_db::store::LexStore;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> String {
    dir.path()
        .join(".lexicon")
        .join("terms.db")
        .to_string_lossy()
        .into_owned()
}

#[tokio::test]
async fn reopening_never_reseeds() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    {
        let store = LexStore::new_local(&path).await.unwrap();
        assert_eq!(store.statistics().await.unwrap().total_rules, 6);
    }
    for _ in 0..2 {
        let store = LexStore::new_local(&path).await.unwrap();
        assert_eq!(store.statistics().await.unwrap().total_rules, 6);
    }
}

#[tokio::test]
async fn records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    {
        let store = LexStore::new_local(&path).await.unwrap();
        store
            .add_term(
                &NewTerm::new("en", "jp", "Dashboard", "ダッシュボード")
                    .term_type(TermType::Admitted)
                    .domain("navigation"),
            )
            .await
            .unwrap();
        store
            .add_rule(&NewRule::new("en", r"\bsubmit\b", "send").description("Use \"send\""))
            .await
            .unwrap();
    }

    let store = LexStore::new_local(&path).await.unwrap();
    let terms = store.terms_by_language("en", 10).await.unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].term_type, TermType::Admitted);
    assert_eq!(terms[0].domain.as_deref(), Some("navigation"));

    let issues = store
        .find_violations("Press Submit to continue", "en")
        .await
        .unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].original, "Submit");
    assert_eq!(issues[0].reason, "Use \"send\"");

    let stats = store.statistics().await.unwrap();
    assert_eq!(stats.total_rules, 7);
    assert_eq!(stats.database_path, path);
}

#[tokio::test]
async fn deleted_rules_stay_deleted() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    {
        let store = LexStore::new_local(&path).await.unwrap();
        store
            .db()
            .conn()
            .execute("DELETE FROM rules WHERE language = 'jp'", ())
            .await
            .unwrap();
    }

    let store = LexStore::new_local(&path).await.unwrap();
    assert!(store.rules_by_language("jp").await.unwrap().is_empty());
    assert!(
        store
            .find_violations("ログイン", "jp")
            .await
            .unwrap()
            .is_empty()
    );
}
