//! # SQLite Storage Module
//!
//! Stores the guess book in a `guesses` table. Each guess gets an
//! auto-incrementing id and guesses are listed in id order.

pub mod connection;
pub mod guess_repository;

pub use connection::DbConnection;
pub use guess_repository::SqliteGuessRepository;
