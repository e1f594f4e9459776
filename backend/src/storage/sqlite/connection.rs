use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::storage::error::BackendError;

/// DbConnection manages the SQLite pool for the guess book
#[derive(Debug, Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (or create) the database file at `path`, creating its parent directory as needed
    pub async fn open_file(path: &Path) -> Result<Self, BackendError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created data directory: {}", parent.display());
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        let db = Self {
            pool: Arc::new(pool),
        };
        db.setup_schema().await?;

        info!("Opened guess database at {}", path.display());
        Ok(db)
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema. Idempotent.
    pub async fn setup_schema(&self) -> Result<(), BackendError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS guesses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                guest_name TEXT NOT NULL,
                baby_name TEXT NOT NULL DEFAULT '',
                gender TEXT NOT NULL DEFAULT '',
                due_date TEXT NOT NULL DEFAULT '',
                due_time TEXT NOT NULL DEFAULT '',
                weight_kg TEXT NOT NULL DEFAULT ''
            );
            "#,
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
