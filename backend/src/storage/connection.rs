use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// DbConnection manages the SQLite pool holding the calendarios table
#[derive(Clone, Debug)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Open a private in-memory database.
    ///
    /// A single connection that never expires keeps the database alive for
    /// as long as this connection (or a clone) exists.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS calendarios (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                mes TEXT NOT NULL,
                dias INTEGER NOT NULL,
                semanas INTEGER NOT NULL,
                festividad TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_in_memory_schema_is_created() {
        let db = DbConnection::in_memory().await.expect("Failed to open database");

        let row = sqlx::query("SELECT COUNT(*) AS count FROM calendarios")
            .fetch_one(db.pool())
            .await
            .expect("calendarios table should exist");
        let count: i64 = row.get("count");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_file_database_is_created_and_reopened() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("calendarios.db");
        let url = format!("sqlite:{}", path.display());

        let db = DbConnection::new(&url, 2).await.expect("Failed to create database");
        sqlx::query("INSERT INTO calendarios (mes, dias, semanas, festividad) VALUES ('May', 1, 1, 'Labor')")
            .execute(db.pool())
            .await
            .expect("Failed to insert row");
        db.pool().close().await;
        assert!(path.exists());

        // Reopening must keep existing rows
        let reopened = DbConnection::new(&url, 2).await.expect("Failed to reopen database");
        let row = sqlx::query("SELECT COUNT(*) AS count FROM calendarios")
            .fetch_one(reopened.pool())
            .await
            .expect("Failed to count rows");
        let count: i64 = row.get("count");
        assert_eq!(count, 1);
    }
}
