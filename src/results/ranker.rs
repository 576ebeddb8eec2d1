//! Relevance scoring and ordering

use super::types::{ContentType, SearchResult};
use std::cmp::Ordering;

/// Weight applied to each video view
pub const VIEW_WEIGHT: f64 = 0.0001;

/// Weight applied to each video like
pub const LIKE_WEIGHT: f64 = 0.001;

/// Calculate the relevance of a single result
///
/// Only videos score; everything else is 0. Missing counts are treated as 0.
pub fn score(result: &SearchResult) -> f64 {
    match result.content_type {
        ContentType::Video => {
            let views = result.views.unwrap_or(0) as f64;
            let likes = result.likes.unwrap_or(0) as f64;
            views * VIEW_WEIGHT + likes * LIKE_WEIGHT
        }
        _ => 0.0,
    }
}

/// Score every result and order them by descending relevance
///
/// The sort is stable: results with equal relevance keep their input order.
pub fn rank(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    for result in &mut results {
        result.relevance = score(result);
    }

    results.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });

    results
}
