use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::commands::guess::SubmitGuessCommand;
use crate::domain::guess_validation;
use crate::domain::models::guess::{GuessRecord, ValidationError};
use crate::storage::{GuessStorage, StorageError};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("guess rejected: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates guesses and appends the valid ones to the guess book
#[derive(Clone)]
pub struct SubmissionService {
    storage: Arc<dyn GuessStorage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn GuessStorage>) -> Self {
        Self { storage }
    }

    /// Validate and store one guess.
    ///
    /// Exactly one guess is appended on success and none on any failure.
    /// Validation errors are returned as-is so the form can show all of them.
    pub async fn submit(&self, command: SubmitGuessCommand) -> Result<GuessRecord, SubmitError> {
        let record = match guess_validation::validate(&command) {
            Ok(record) => record,
            Err(errors) => {
                info!("Rejected guess with {} validation error(s)", errors.len());
                return Err(SubmitError::Invalid(errors));
            }
        };

        if let Err(e) = self.storage.append(&record).await {
            warn!("Failed to store guess from '{}': {}", record.guest_name(), e);
            return Err(e.into());
        }

        info!("Stored guess from '{}'", record.guest_name());
        Ok(record)
    }
}
