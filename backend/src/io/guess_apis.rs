use tracing::{error, info};

use crate::domain::SubmitError;
use crate::io::mappers::GuessMapper;
use crate::AppState;
use shared::{GuessForm, SubmitGuessResponse};

/// Handle a posted guess form
pub async fn submit_guess(app_state: &AppState, form: GuessForm) -> SubmitGuessResponse {
    info!("Submitting guess from form");

    let command = GuessMapper::to_command(form);
    match app_state.submission_service.submit(command).await {
        Ok(record) => SubmitGuessResponse {
            success: true,
            errors: Vec::new(),
            entry: Some(GuessMapper::to_dto(&record)),
            storage_error: None,
        },
        Err(SubmitError::Invalid(errors)) => SubmitGuessResponse {
            success: false,
            errors: errors.iter().map(GuessMapper::to_field_error).collect(),
            entry: None,
            storage_error: None,
        },
        Err(SubmitError::Storage(e)) => {
            error!("Failed to save guess: {}", e);
            SubmitGuessResponse {
                success: false,
                errors: Vec::new(),
                entry: None,
                storage_error: Some("Sorry, your guess could not be saved. Please try again.".to_string()),
            }
        }
    }
}
