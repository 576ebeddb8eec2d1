//! Content classification for web results
//!
//! Web providers do not tell us what kind of page a hit is, so we infer it
//! from the link and the page's Open Graph metadata. Rules are checked in
//! order and the first match wins.

use super::types::ContentType;

/// Hosts and domain fragments that mark a link as academic
const ACADEMIC_MARKERS: &[&str] = &["scholar.google.com", ".edu"];

/// Page metadata relevant to classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Value of the `og:type` meta tag, if any
    pub og_type: Option<String>,
}

impl PageMetadata {
    pub fn with_og_type(og_type: impl Into<String>) -> Self {
        Self {
            og_type: Some(og_type.into()),
        }
    }
}

/// Assign a content category to a web result
pub fn classify(link: &str, metadata: &PageMetadata) -> ContentType {
    if ACADEMIC_MARKERS.iter().any(|marker| link.contains(marker)) {
        return ContentType::Academic;
    }

    if metadata.og_type.as_deref() == Some("article") {
        return ContentType::Article;
    }

    ContentType::Blog
}
