//! Catalog database access
//!
//! The fragrance catalog lives in a SQLite database that ScentMatch only
//! ever reads. All connections are opened read-only.

use crate::{Error, Result};
use sqlx::SqlitePool;
use std::path::Path;

mod models;
pub use models::{load_fragrances, FragranceEntry};

/// Connect to the catalog database with read-only mode
///
/// Safety: Uses SQLite mode=ro to prevent any write operations
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::NotFound(format!(
            "Catalog database not found: {}\nPlace scentmatch.db in the root folder before starting.",
            db_path.display()
        )));
    }

    // mode=ro: read-only mode
    // immutable=1: SQLite won't write even for internal operations
    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());

    let pool = SqlitePool::connect(&db_url).await?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            panic!("SAFETY VIOLATION: Catalog connection is not read-only!");
        }
    }

    Ok(pool)
}
