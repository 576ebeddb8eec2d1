//! Google Custom Search JSON API engine implementation

use super::traits::*;
use crate::config::GoogleSettings;
use crate::error::{Result, SearchError};
use crate::results::{classify, PageMetadata, SearchResult};
use serde::Deserialize;

/// Google programmable web search engine
pub struct GoogleCustomSearch {
    base_url: String,
    api_key: String,
    search_engine_id: String,
}

impl GoogleCustomSearch {
    pub fn new(api_key: impl Into<String>, search_engine_id: impl Into<String>) -> Self {
        Self::from_settings(&GoogleSettings {
            api_key: api_key.into(),
            search_engine_id: search_engine_id.into(),
            ..Default::default()
        })
    }

    pub fn from_settings(settings: &GoogleSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            search_engine_id: settings.search_engine_id.clone(),
        }
    }

    fn to_result(item: Item) -> SearchResult {
        let link = item.link.unwrap_or_default();
        let metadata = item
            .pagemap
            .as_ref()
            .map(PageMap::metadata)
            .unwrap_or_default();
        let content_type = classify(&link, &metadata);
        let id = item.cache_id.unwrap_or_else(|| link.clone());

        SearchResult::new(id, item.title.unwrap_or_default(), link, content_type)
            .with_description(item.snippet.unwrap_or_default())
    }
}

impl Engine for GoogleCustomSearch {
    fn name(&self) -> &str {
        "google"
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new().api_key_required(true)
    }

    fn request(&self, params: &RequestParams) -> Result<EngineRequest> {
        if self.api_key.is_empty() {
            return Err(SearchError::MissingCredentials("GOOGLE_API_KEY"));
        }
        if self.search_engine_id.is_empty() {
            return Err(SearchError::MissingCredentials("GOOGLE_SEARCH_ENGINE_ID"));
        }

        Ok(EngineRequest::get(&self.base_url)
            .param("q", params.query.clone())
            .param("cx", self.search_engine_id.clone())
            .param("key", self.api_key.clone())
            .param("num", params.max_results.to_string()))
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<SearchResult>> {
        response.error_for_status()?;

        let body: SearchResponse = response.json()?;
        Ok(body
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Self::to_result)
            .collect())
    }
}

/// `cse.list` response body, reduced to what we read
///
/// Containers are optional so that both a missing field and an explicit
/// `null` decode as empty.
#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Option<Vec<Item>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Item {
    cache_id: Option<String>,
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
    pagemap: Option<PageMap>,
}

#[derive(Debug, Default, Deserialize)]
struct PageMap {
    #[serde(default)]
    metatags: Option<Vec<serde_json::Value>>,
}

impl PageMap {
    /// Only the first metatags block is consulted; a non-object block
    /// carries no metadata
    fn metadata(&self) -> PageMetadata {
        let og_type = self
            .metatags
            .as_deref()
            .and_then(|blocks| blocks.first())
            .and_then(|tags| tags.get("og:type"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        PageMetadata { og_type }
    }
}
