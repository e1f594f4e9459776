//! # Baby Guess Backend
//!
//! Contains all non-UI logic for the baby shower guess book.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: validation of guesses and the results gate
//! - **Storage**: append-only persistence in a CSV file or a SQLite database
//! - **IO**: DTO-in, DTO-out functions a web layer or the CLI can call
//!
//! ## Architecture
//!
//! ```text
//! Caller (CLI, web form)
//!     ↓
//! IO Layer (submit_guess, get_results)
//!     ↓
//! Domain Layer (SubmissionService, ResultsGateService)
//!     ↓
//! Storage Layer (GuessStorage: CSV or SQLite)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{AppConfig, StorageKind};
use crate::domain::{ResultsGateService, SubmissionService};
use crate::storage::{
    CsvConnection, CsvGuessRepository, DbConnection, GuessStorage, SqliteGuessRepository, StorageError,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn GuessStorage>,
    pub submission_service: SubmissionService,
    pub results_gate: ResultsGateService,
}

impl AppState {
    /// Initialize `storage` and wire the services around it
    pub async fn with_storage(
        storage: Arc<dyn GuessStorage>,
        results_password: String,
        show_results: bool,
    ) -> Result<Self, StorageError> {
        storage.initialize().await?;

        let submission_service = SubmissionService::new(storage.clone());
        let results_gate = ResultsGateService::new(storage.clone(), results_password, show_results);

        Ok(Self {
            storage,
            submission_service,
            results_gate,
        })
    }
}

/// Initialize the backend with the storage selected in `config`
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up {:?} storage in {}", config.storage, config.data_dir.display());
    let storage: Arc<dyn GuessStorage> = match config.storage {
        StorageKind::Csv => {
            let connection = CsvConnection::new(&config.data_dir);
            Arc::new(CsvGuessRepository::new(connection))
        }
        StorageKind::Sqlite => {
            let path = config.database_path();
            let db = DbConnection::open_file(&path)
                .await
                .with_context(|| format!("Failed to open database {}", path.display()))?;
            Arc::new(SqliteGuessRepository::new(db))
        }
    };

    if config.show_results {
        warn!("SHOW_RESULTS is on: the results page is public");
    }

    info!("Setting up application state");
    AppState::with_storage(storage, config.results_password.clone(), config.show_results)
        .await
        .context("Failed to initialize guess storage")
}
