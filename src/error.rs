//! Error types for provider calls and search execution

use thiserror::Error;

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while querying a search provider
#[derive(Error, Debug)]
pub enum SearchError {
    /// A required credential was not configured
    #[error("Missing credential: {0}")]
    MissingCredentials(&'static str),

    /// The provider rejected the credentials (401/403)
    #[error("Provider rejected credentials (HTTP {0})")]
    AuthFailed(u16),

    /// The provider is throttling us (429)
    #[error("Rate limited by provider")]
    RateLimited,

    /// Any other non-success status
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Outgoing request timed out
    #[error("Request timed out")]
    Timeout,

    /// Transport failure
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The provider answered with a body we could not decode
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl SearchError {
    /// Map a non-success HTTP status into the matching variant
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::AuthFailed(status),
            429 => Self::RateLimited,
            _ => Self::Http(status),
        }
    }

    /// Short machine-readable tag, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredentials(_) => "missing_credentials",
            Self::AuthFailed(_) => "auth_failed",
            Self::RateLimited => "rate_limited",
            Self::Http(_) => "http_error",
            Self::Timeout => "timeout",
            Self::Network(_) => "network_error",
            Self::Parse(_) => "parse_error",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
