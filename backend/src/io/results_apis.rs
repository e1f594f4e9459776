use tracing::{error, info};

use crate::domain::commands::results::{LockedReason, ResultsAccess, UnlockResultsCommand};
use crate::io::mappers::GuessMapper;
use crate::AppState;
use shared::{ResultsRequest, ResultsResponse, GUESS_COLUMNS};

const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password. Please try again.";

/// Handle a visit to the results page, with or without a submitted password
pub async fn get_results(app_state: &AppState, request: ResultsRequest) -> ResultsResponse {
    info!("Results requested (password supplied: {})", request.password.is_some());

    // The password box is free text; surrounding whitespace is not part of the secret
    let command = UnlockResultsCommand {
        password: request.password.map(|p| p.trim().to_string()),
    };

    match app_state.results_gate.unlock(command).await {
        Ok(ResultsAccess::Unlocked(records)) => ResultsResponse {
            unlocked: true,
            headers: GUESS_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.iter().map(GuessMapper::to_dto).collect(),
            error: None,
        },
        Ok(ResultsAccess::Locked { reason }) => ResultsResponse::locked(match reason {
            LockedReason::NoSecretSupplied => None,
            LockedReason::IncorrectSecret => Some(INCORRECT_PASSWORD_MESSAGE.to_string()),
        }),
        Err(e) => {
            error!("Failed to read guesses: {}", e);
            ResultsResponse::locked(Some("Guesses could not be loaded right now.".to_string()))
        }
    }
}
