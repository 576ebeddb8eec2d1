//! MediaSearch: one search box over a video platform and the web
//!
//! Queries YouTube and Google Custom Search, classifies web hits into
//! content categories, ranks everything into a single list and serves it
//! as JSON.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use engines::{Engine, Provider};
pub use error::SearchError;
pub use results::{ContentType, SearchResult};
pub use search::Search;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Results requested from each provider per query
pub const DEFAULT_MAX_RESULTS: u32 = 10;
