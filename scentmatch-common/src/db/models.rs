//! Catalog row model
//!
//! One row per fragrance. Rows are loaded fresh for every request and
//! discarded after the response is rendered; nothing derived is persisted.

use crate::notes::parse_notes;
use crate::Result;
use sqlx::{Row, SqlitePool};

/// One fragrance catalog row
#[derive(Debug, Clone)]
pub struct FragranceEntry {
    pub brand: String,
    pub name: String,
    /// Olfactory family classification, e.g. 木质东方调
    pub frag_type: String,
    /// Raw annotated signature-note text, e.g. "玫瑰(30%) 木质香(20%)"
    pub sig_note: Option<String>,
    /// Gender category: 男香 / 女香 / 中性香
    pub attribute: String,
    pub itemcomment1: Option<String>,
    /// (note, percentage) pairs derived from sig_note, in source order
    pub parsed_notes: Vec<(String, u32)>,
}

/// Load the full fragrance catalog
///
/// Derives parsed_notes from the raw sig_note column for every row.
pub async fn load_fragrances(pool: &SqlitePool) -> Result<Vec<FragranceEntry>> {
    let rows = sqlx::query(
        "SELECT brand, name, frag_type, sig_note, attribute, itemcomment1 FROM fragrance",
    )
    .fetch_all(pool)
    .await?;

    let entries = rows
        .iter()
        .map(|row| {
            let sig_note: Option<String> = row.get("sig_note");
            FragranceEntry {
                brand: row.get("brand"),
                name: row.get("name"),
                frag_type: row.get("frag_type"),
                attribute: row.get("attribute"),
                itemcomment1: row.get("itemcomment1"),
                parsed_notes: parse_notes(sig_note.as_deref()),
                sig_note,
            }
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_catalog() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS fragrance (
                brand TEXT NOT NULL,
                name TEXT NOT NULL,
                frag_type TEXT NOT NULL,
                sig_note TEXT,
                attribute TEXT NOT NULL,
                itemcomment1 TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_load_derives_parsed_notes() {
        let pool = setup_catalog().await;

        sqlx::query(
            "INSERT INTO fragrance (brand, name, frag_type, sig_note, attribute, itemcomment1)
             VALUES ('测试品牌', '晨光', '木质东方调', '橙子(40%) 雪松(20%)', '男香', '清爽')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let entries = load_fragrances(&pool).await.expect("Failed to load catalog");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "晨光");
        assert_eq!(
            entries[0].parsed_notes,
            vec![("橙子".to_string(), 40), ("雪松".to_string(), 20)]
        );
    }

    #[tokio::test]
    async fn test_load_handles_null_columns() {
        let pool = setup_catalog().await;

        sqlx::query(
            "INSERT INTO fragrance (brand, name, frag_type, sig_note, attribute, itemcomment1)
             VALUES ('测试品牌', '夜影', '花香调', NULL, '女香', NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let entries = load_fragrances(&pool).await.expect("Failed to load catalog");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].sig_note.is_none());
        assert!(entries[0].itemcomment1.is_none());
        assert!(entries[0].parsed_notes.is_empty());
    }
}
