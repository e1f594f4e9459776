//! Results gate for the guess book.
//!
//! The guess book listing is either public or protected by one shared secret.
//! There is no rate limiting or lockout after failed attempts; deployments
//! exposed to the internet should throttle the results page in front of this.

use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::results::{LockedReason, ResultsAccess, UnlockResultsCommand};
use crate::storage::{GuessStorage, StorageError};

/// Decide whether a visitor may see the guess book.
///
/// Public mode always authorizes. Otherwise the supplied secret must equal the
/// configured one exactly (case-sensitive). Both values are hashed first so
/// the comparison takes the same time whatever the inputs are.
pub fn authorize(supplied_secret: &str, configured_secret: &str, public_mode: bool) -> bool {
    if public_mode {
        return true;
    }

    let supplied = Sha256::digest(supplied_secret.as_bytes());
    let configured = Sha256::digest(configured_secret.as_bytes());
    supplied
        .iter()
        .zip(configured.iter())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

/// Guards `GuessStorage::list_all` behind the shared secret
#[derive(Clone)]
pub struct ResultsGateService {
    storage: Arc<dyn GuessStorage>,
    configured_secret: String,
    public_mode: bool,
}

impl ResultsGateService {
    pub fn new(storage: Arc<dyn GuessStorage>, configured_secret: String, public_mode: bool) -> Self {
        if !public_mode && configured_secret.is_empty() {
            warn!("Results password is empty: an empty password will unlock the guess book");
        }
        Self {
            storage,
            configured_secret,
            public_mode,
        }
    }

    pub fn is_public(&self) -> bool {
        self.public_mode
    }

    /// Try to open the guess book.
    ///
    /// Without a supplied secret the book stays locked unless public mode is
    /// on. Guesses are only read from storage once access is granted.
    pub async fn unlock(&self, command: UnlockResultsCommand) -> Result<ResultsAccess, StorageError> {
        let granted = match (&command.password, self.public_mode) {
            (_, true) => true,
            (None, false) => {
                return Ok(ResultsAccess::Locked {
                    reason: LockedReason::NoSecretSupplied,
                })
            }
            (Some(password), false) => authorize(password, &self.configured_secret, false),
        };

        if !granted {
            let attempted_length = command.password.as_deref().map(str::len).unwrap_or_default();
            info!("Results unlock failed (supplied length: {})", attempted_length);
            return Ok(ResultsAccess::Locked {
                reason: LockedReason::IncorrectSecret,
            });
        }

        let records = self.storage.list_all().await?;
        info!("Results unlocked, {} guesses", records.len());
        Ok(ResultsAccess::Unlocked(records))
    }
}
