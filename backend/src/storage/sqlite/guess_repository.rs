use async_trait::async_trait;
use sqlx::Row;
use tracing::{debug, info};

use crate::domain::models::guess::GuessRecord;
use crate::storage::error::{BackendError, StorageError};
use crate::storage::guess_row::GuessRow;
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::GuessStorage;

/// SQLite-based guess repository, one row per guess
#[derive(Debug, Clone)]
pub struct SqliteGuessRepository {
    db: DbConnection,
}

impl SqliteGuessRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a guess and return its assigned id
    async fn insert_row(&self, row: GuessRow) -> Result<i64, BackendError> {
        let result = sqlx::query(
            r#"
            INSERT INTO guesses (timestamp, guest_name, baby_name, gender, due_date, due_time, weight_kg)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(row.timestamp)
        .bind(row.guest_name)
        .bind(row.baby_name)
        .bind(row.gender)
        .bind(row.due_date)
        .bind(row.due_time)
        .bind(row.weight_kg)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn fetch_rows(&self) -> Result<Vec<GuessRecord>, BackendError> {
        let rows = sqlx::query(
            r#"
            SELECT id, timestamp, guest_name, baby_name, gender, due_date, due_time, weight_kg
            FROM guesses
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter()
            .map(|row| -> Result<GuessRecord, BackendError> {
                let id: i64 = row.try_get("id")?;
                let guess_row = GuessRow {
                    timestamp: row.try_get("timestamp")?,
                    guest_name: row.try_get("guest_name")?,
                    baby_name: row.try_get("baby_name")?,
                    gender: row.try_get("gender")?,
                    due_date: row.try_get("due_date")?,
                    due_time: row.try_get("due_time")?,
                    weight_kg: row.try_get("weight_kg")?,
                };
                GuessRecord::try_from(guess_row).map_err(|reason| BackendError::Corrupt {
                    location: format!("guesses row {}", id),
                    reason,
                })
            })
            .collect()
    }
}

#[async_trait]
impl GuessStorage for SqliteGuessRepository {
    async fn initialize(&self) -> Result<(), StorageError> {
        self.db
            .setup_schema()
            .await
            .map_err(StorageError::Initialize)?;
        info!("SQLite guess storage ready");
        Ok(())
    }

    async fn append(&self, record: &GuessRecord) -> Result<(), StorageError> {
        let id = self
            .insert_row(GuessRow::from(record))
            .await
            .map_err(StorageError::Write)?;
        debug!("Inserted guess with ID: {}", id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<GuessRecord>, StorageError> {
        let records = self.fetch_rows().await.map_err(StorageError::Read)?;
        debug!("Loaded {} guesses from SQLite", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{guess, TestEnvironment};

    async fn setup_test() -> (SqliteGuessRepository, TestEnvironment) {
        let env = TestEnvironment::new().await.unwrap();
        let db = DbConnection::open_file(&env.database_path())
            .await
            .expect("Failed to create test database");
        let repo = SqliteGuessRepository::new(db);
        repo.initialize().await.unwrap();
        (repo, env)
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let (repo, _env) = setup_test().await;
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let (repo, _env) = setup_test().await;

        let first = repo.insert_row(GuessRow::from(&guess("A"))).await.unwrap();
        let second = repo.insert_row(GuessRow::from(&guess("B"))).await.unwrap();
        assert_eq!(second, first + 1);
    }

    #[tokio::test]
    async fn test_append_preserves_order_and_fields() {
        let (repo, _env) = setup_test().await;
        let command = crate::domain::commands::guess::SubmitGuessCommand {
            guest_name: "Uncle Ben".to_string(),
            baby_name: "Peter".to_string(),
            gender: "boy".to_string(),
            due_date: "2025-04-02".to_string(),
            due_time: "08:15".to_string(),
            weight: "3.4".to_string(),
        };
        let first = guess("A");
        let second = crate::domain::guess_validation::validate(&command).unwrap();

        repo.append(&first).await.unwrap();
        repo.append(&second).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_duplicate_guesses_are_allowed() {
        let (repo, _env) = setup_test().await;
        repo.append(&guess("A")).await.unwrap();
        repo.append(&guess("A")).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let (repo, env) = setup_test().await;
        repo.append(&guess("A")).await.unwrap();
        repo.db.pool().close().await;

        let reopened = SqliteGuessRepository::new(
            DbConnection::open_file(&env.database_path()).await.unwrap(),
        );
        reopened.initialize().await.unwrap();

        let guesses = reopened.list_all().await.unwrap();
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].guest_name(), "A");
    }

    #[tokio::test]
    async fn test_corrupt_row_is_a_read_error() {
        let (repo, _env) = setup_test().await;
        sqlx::query("INSERT INTO guesses (timestamp, guest_name, weight_kg) VALUES ('2025-03-01T10:00:00Z', 'Mallory', 'heavy')")
            .execute(repo.db.pool())
            .await
            .unwrap();

        let error = repo.list_all().await.unwrap_err();
        assert!(matches!(error, StorageError::Read(BackendError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_closed_pool_is_a_write_error() {
        let (repo, _env) = setup_test().await;
        repo.db.pool().close().await;

        let error = repo.append(&guess("A")).await.unwrap_err();
        assert!(matches!(error, StorageError::Write(BackendError::Database(_))));
    }
}
