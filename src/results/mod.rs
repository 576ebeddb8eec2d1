//! Result types, classification and ranking
//!
//! This module defines the unified result shape every provider maps into,
//! along with the rules that categorize and order those results.

pub mod classifier;
pub mod ranker;
mod types;

pub use classifier::{classify, PageMetadata};
pub use ranker::rank;
pub use types::*;
