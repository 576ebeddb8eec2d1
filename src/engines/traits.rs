//! Engine traits and types

use crate::error::{Result, SearchError};
use crate::results::SearchResult;
use async_trait::async_trait;
use std::collections::HashMap;

/// Parameters for building a search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Search query string
    pub query: String,
    /// Number of results to ask the provider for
    pub max_results: u32,
}

impl RequestParams {
    /// Create new request parameters
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: crate::DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

/// HTTP request to be made by the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters, in the order they were added
    pub params: Vec<(String, String)>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter by name
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with the matching error if the status is not 2xx
    pub fn error_for_status(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(SearchError::from_status(self.status))
        }
    }
}

/// A search API adapter: builds requests and maps responses
///
/// Engines are pure. They never touch the network themselves; see
/// [`EngineProvider`](super::EngineProvider) for the part that does.
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Short description of the engine
    fn about(&self) -> EngineAbout {
        EngineAbout::default()
    }

    /// Build the HTTP request for a search
    fn request(&self, params: &RequestParams) -> Result<EngineRequest>;

    /// Parse the HTTP response into results
    fn response(&self, response: EngineResponse) -> Result<Vec<SearchResult>>;
}

/// Something that can answer a query with unified results
///
/// This is the seam the search executor depends on, so tests can swap in
/// fakes without any HTTP.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Run a search
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Engine metadata
#[derive(Debug, Clone, Default)]
pub struct EngineAbout {
    /// Whether an API key is required
    pub require_api_key: bool,
}

impl EngineAbout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key_required(mut self, required: bool) -> Self {
        self.require_api_key = required;
        self
    }
}
