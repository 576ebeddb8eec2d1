//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single search result, as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Provider-assigned identifier
    pub id: String,
    /// The title of the result
    pub title: String,
    /// Content snippet/description
    pub description: String,
    /// The URL of the result
    pub link: String,
    /// Content category
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// View count (videos only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Like count (videos only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    /// Calculated relevance score
    #[serde(default)]
    pub relevance: f64,
}

impl SearchResult {
    /// Create a new result with zero relevance and no engagement counts
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            link: link.into(),
            content_type,
            views: None,
            likes: None,
            relevance: 0.0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set engagement counts
    pub fn with_engagement(mut self, views: u64, likes: u64) -> Self {
        self.views = Some(views);
        self.likes = Some(likes);
        self
    }
}

/// Content category of a result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Article,
    Academic,
    Blog,
}

impl ContentType {
    /// Every category, in display order
    pub const ALL: [ContentType; 4] = [Self::Video, Self::Article, Self::Academic, Self::Blog];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Article => "article",
            Self::Academic => "academic",
            Self::Blog => "blog",
        }
    }
}
