use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use crate::storage::error::BackendError;
use shared::GUESS_COLUMNS;

/// File name of the guess book inside the data directory
pub const GUESSES_FILE_NAME: &str = "guesses.csv";

/// CsvConnection knows where the guess book lives and makes sure it exists
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at `base_directory`.
    ///
    /// Nothing is created on disk until [`CsvConnection::ensure_guesses_file_exists`] runs.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Self {
        Self {
            base_directory: base_directory.as_ref().to_path_buf(),
        }
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path of the guess book
    pub fn guesses_file_path(&self) -> PathBuf {
        self.base_directory.join(GUESSES_FILE_NAME)
    }

    /// Ensure the data directory and the guess book exist, writing the header
    /// row when the file is new or still empty. Existing rows are never rewritten.
    pub fn ensure_guesses_file_exists(&self) -> Result<(), BackendError> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
            info!("Created data directory: {}", self.base_directory.display());
        }

        let file_path = self.guesses_file_path();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&file_path)?;

        // A zero-byte file is left behind when a previous header write was interrupted
        if file.metadata()?.len() > 0 {
            return Ok(());
        }

        let mut csv_writer = Writer::from_writer(file);
        csv_writer.write_record(GUESS_COLUMNS)?;
        csv_writer.flush()?;
        csv_writer.get_ref().sync_all()?;

        info!("Created guess book with header: {}", file_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_does_not_touch_disk() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");

        let connection = CsvConnection::new(&data_dir);
        assert!(!data_dir.exists());
        assert_eq!(connection.guesses_file_path(), data_dir.join("guesses.csv"));
    }

    #[test]
    fn test_ensure_file_creates_directory_and_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path().join("nested").join("data"));

        connection.ensure_guesses_file_exists().unwrap();
        connection.ensure_guesses_file_exists().unwrap();

        let content = fs::read_to_string(connection.guesses_file_path()).unwrap();
        assert_eq!(
            content,
            "timestamp,guest_name,baby_name,gender,due_date,due_time,weight_kg\n"
        );
    }

    #[test]
    fn test_ensure_file_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path());
        let existing = "timestamp,guest_name,baby_name,gender,due_date,due_time,weight_kg\n\
                        2025-03-01T10:00:00Z,Aunt May,,,,,\n";
        fs::write(connection.guesses_file_path(), existing).unwrap();

        connection.ensure_guesses_file_exists().unwrap();

        let content = fs::read_to_string(connection.guesses_file_path()).unwrap();
        assert_eq!(content, existing);
    }

    #[test]
    fn test_ensure_file_writes_header_into_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path());
        fs::write(connection.guesses_file_path(), "").unwrap();

        connection.ensure_guesses_file_exists().unwrap();

        let content = fs::read_to_string(connection.guesses_file_path()).unwrap();
        assert_eq!(
            content,
            "timestamp,guest_name,baby_name,gender,due_date,due_time,weight_kg\n"
        );
    }
}
