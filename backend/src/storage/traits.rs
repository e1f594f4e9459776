//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different
//! storage backends to be used interchangeably in the domain layer.

use async_trait::async_trait;

use crate::domain::models::guess::GuessRecord;
use crate::storage::error::StorageError;

/// Append-only storage for guesses
///
/// Guesses are never updated or deleted once stored, so the contract only
/// offers insertion and a full read. Implementations exist for CSV files and
/// SQLite; the domain layer only ever sees this trait.
#[async_trait]
pub trait GuessStorage: Send + Sync {
    /// Create the backing file or table if it does not exist yet.
    ///
    /// Safe to call on every start; existing guesses are left untouched.
    async fn initialize(&self) -> Result<(), StorageError>;

    /// Durably store one guess after all previously stored ones
    async fn append(&self, record: &GuessRecord) -> Result<(), StorageError>;

    /// All stored guesses, oldest first
    async fn list_all(&self) -> Result<Vec<GuessRecord>, StorageError>;
}
