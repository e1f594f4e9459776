/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is removed
/// even if tests panic or fail.
use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::storage::csv::CsvConnection;
use crate::domain::commands::guess::SubmitGuessCommand;
use crate::domain::guess_validation::validate;
use crate::domain::models::guess::GuessRecord;

/// RAII Test Environment that automatically cleans up on drop
///
/// The temporary directory (and every guess book and database inside it) is
/// removed when the TestEnvironment goes out of scope.
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The CSV connection for the test
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path);

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Get the base directory path for this test environment
    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Path for a SQLite database file inside this environment
    pub fn database_path(&self) -> PathBuf {
        self.base_path.join("guesses.db")
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("BABY_GUESS_DEBUG_TESTS").is_ok() {
            println!("🧹 Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// A valid guess from `guest_name`, stamped now
pub fn guess(guest_name: &str) -> GuessRecord {
    let command = SubmitGuessCommand {
        guest_name: guest_name.to_string(),
        ..Default::default()
    };
    validate(&command).expect("test guess should be valid")
}
