//! # Domain Module
//!
//! Contains the business rules of the guess book.
//!
//! ## Module Organization
//!
//! - **models**: the guess record, its fields and validation errors
//! - **guess_validation**: turns raw form input into a guess record
//! - **submission_service**: validates a guess and appends it to storage
//! - **results_gate**: shared-secret check in front of the guess listing
//! - **commands**: internal command/result types used by the services
//!
//! ## Business Rules
//!
//! - A guess needs a guest name; every other field is optional
//! - Weight guesses lie between 0 and 10 kg
//! - Guesses are stamped with the submission time and never changed afterwards
//! - The listing is public or needs the configured secret
//!
//! Services receive their storage as an `Arc<dyn GuessStorage>`, so they work
//! with any backend and with test doubles.

pub mod commands;
pub mod guess_validation;
pub mod models;
pub mod results_gate;
pub mod submission_service;

pub use commands::*;
pub use results_gate::*;
pub use submission_service::*;
