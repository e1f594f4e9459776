//! # IO Module
//!
//! Boundary between callers (a web layer, the CLI) and the domain.
//!
//! Functions here take the public DTOs from the `shared` crate, call the
//! domain services held in [`crate::AppState`], and turn domain results and
//! errors into DTOs. They never fail: every outcome, including storage
//! trouble, is described in the response so the caller only has to render it.

pub mod guess_apis;
pub mod mappers;
pub mod results_apis;

pub use guess_apis::submit_guess;
pub use results_apis::get_results;
