//! # CSV Guess Repository
//!
//! This module provides a file-based guess storage implementation using a
//! single CSV file in the data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── guesses.csv    ← This module manages this file
//! ```
//!
//! ## CSV Format
//!
//! ```csv
//! timestamp,guest_name,baby_name,gender,due_date,due_time,weight_kg
//! 2025-03-01T10:00:00.123Z,Aunt May,Peter,boy,2025-04-02,08:15,3.4
//! 2025-03-01T10:05:12.004Z,"Smith, John",,,,,
//! ```
//!
//! The header is written once when the file is created. Each append opens the
//! file, writes one row, flushes and syncs before returning. Rows are read back
//! by header name, in file order.

use async_trait::async_trait;
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader};
use tracing::{debug, info};

use super::connection::CsvConnection;
use crate::domain::models::guess::GuessRecord;
use crate::storage::error::{BackendError, StorageError};
use crate::storage::guess_row::GuessRow;
use crate::storage::traits::GuessStorage;

/// CSV-based guess repository
#[derive(Debug, Clone)]
pub struct CsvGuessRepository {
    connection: CsvConnection,
}

impl CsvGuessRepository {
    /// Create a new CSV guess repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &CsvConnection {
        &self.connection
    }

    /// Append one row to the guess book
    fn write_row(&self, row: GuessRow) -> Result<(), BackendError> {
        self.connection.ensure_guesses_file_exists()?;

        let csv_path = self.connection.guesses_file_path();
        let file = OpenOptions::new().append(true).open(&csv_path)?;

        let mut csv_writer = Writer::from_writer(file);
        csv_writer.write_record(row.into_columns())?;
        csv_writer.flush()?;
        csv_writer.get_ref().sync_data()?;

        debug!("Appended guess to {:?}", csv_path);
        Ok(())
    }

    /// Load every row of the guess book, oldest first
    fn read_rows(&self) -> Result<Vec<GuessRecord>, BackendError> {
        let csv_path = self.connection.guesses_file_path();

        let file = match File::open(&csv_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No guess book at {:?} yet", csv_path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut csv_reader = Reader::from_reader(BufReader::new(file));
        let headers = csv_reader.headers()?.clone();

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let csv_record = result?;
            let line = csv_record.position().map(|p| p.line()).unwrap_or_default();
            let row: GuessRow = csv_record.deserialize(Some(&headers))?;

            let record = GuessRecord::try_from(row).map_err(|reason| BackendError::Corrupt {
                location: format!("{}:{}", csv_path.display(), line),
                reason,
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

#[async_trait]
impl GuessStorage for CsvGuessRepository {
    async fn initialize(&self) -> Result<(), StorageError> {
        self.connection
            .ensure_guesses_file_exists()
            .map_err(StorageError::Initialize)?;
        info!(
            "CSV guess storage ready at {}",
            self.connection.guesses_file_path().display()
        );
        Ok(())
    }

    async fn append(&self, record: &GuessRecord) -> Result<(), StorageError> {
        self.write_row(GuessRow::from(record))
            .map_err(StorageError::Write)
    }

    async fn list_all(&self) -> Result<Vec<GuessRecord>, StorageError> {
        let records = self.read_rows().map_err(StorageError::Read)?;
        debug!("Loaded {} guesses from CSV", records.len());
        Ok(records)
    }
}
