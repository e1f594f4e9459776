//! # CSV Storage Module
//!
//! Stores the guess book as a single comma-separated file in the data
//! directory. This is the default storage backend.

pub mod connection;
pub mod guess_repository;

pub use connection::CsvConnection;
pub use guess_repository::CsvGuessRepository;
