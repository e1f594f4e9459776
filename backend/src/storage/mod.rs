//! # Storage Module
//!
//! Handles persistence of guesses for the guess book.
//!
//! The domain layer talks to storage only through the [`GuessStorage`] trait,
//! so the backing medium can be swapped without touching the submission
//! workflow or the results gate.
//!
//! ## Implementations
//!
//! - **csv**: one `guesses.csv` file in the data directory, header row first
//! - **sqlite**: one `guesses` table with an auto-incrementing id
//!
//! Both are append-only: there is no update or delete.

pub mod csv;
pub mod error;
pub(crate) mod guess_row;
pub mod sqlite;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use self::csv::{CsvConnection, CsvGuessRepository};
pub use error::{BackendError, StorageError};
pub use sqlite::{DbConnection, SqliteGuessRepository};
pub use traits::GuessStorage;
