//! Search orchestration module
//!
//! Coordinates the provider calls, concatenates their results and ranks
//! the combined list.

mod executor;

pub use executor::Search;
