//! Binds a pure engine to the HTTP client

use super::traits::{Engine, Provider, RequestParams};
use crate::error::Result;
use crate::network::HttpClient;
use crate::results::SearchResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// A provider that runs an [`Engine`] over HTTP
pub struct EngineProvider {
    engine: Arc<dyn Engine>,
    client: HttpClient,
    max_results: u32,
}

impl EngineProvider {
    pub fn new(engine: Arc<dyn Engine>, client: HttpClient) -> Self {
        Self {
            engine,
            client,
            max_results: crate::DEFAULT_MAX_RESULTS,
        }
    }

    /// Set how many results to request per query
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

#[async_trait]
impl Provider for EngineProvider {
    fn name(&self) -> &str {
        self.engine.name()
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let start = Instant::now();
        let params = RequestParams::new(query).with_max_results(self.max_results);

        let request = self.engine.request(&params)?;
        let response = self.client.execute(request).await?;
        let status = response.status;

        let results = self.engine.response(response).map_err(|e| {
            warn!(
                engine = self.engine.name(),
                status,
                kind = e.kind(),
                "provider request failed: {}",
                e
            );
            e
        })?;

        debug!(
            "Engine {} returned {} results in {:?}",
            self.engine.name(),
            results.len(),
            start.elapsed()
        );

        Ok(results)
    }
}
