//! Search execution and orchestration

use crate::engines::{Provider, Providers};
use crate::error::Result;
use crate::results::{rank, SearchResult};
use futures::future::try_join;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Search executor that queries the video and web providers
pub struct Search {
    video: Arc<dyn Provider>,
    web: Arc<dyn Provider>,
}

impl Search {
    /// Create a new search executor
    pub fn new(video: Arc<dyn Provider>, web: Arc<dyn Provider>) -> Self {
        Self { video, web }
    }

    /// Query both providers and return one ranked list
    ///
    /// Both calls run concurrently, but video results always precede web
    /// results before ranking. If either provider fails, the whole search
    /// fails and no partial results are returned.
    pub async fn execute(&self, query: &str) -> Result<Vec<SearchResult>> {
        let start = Instant::now();
        info!("Executing search '{}' on {} and {}", query, self.video.name(), self.web.name());

        let (videos, pages) = try_join(self.video.search(query), self.web.search(query)).await?;

        debug!(
            "{} returned {} results, {} returned {} results",
            self.video.name(),
            videos.len(),
            self.web.name(),
            pages.len()
        );

        let mut combined = videos;
        combined.extend(pages);
        let ranked = rank(combined);

        debug!("Search '{}' finished in {:?}", query, start.elapsed());
        Ok(ranked)
    }
}

impl From<Providers> for Search {
    fn from(providers: Providers) -> Self {
        Self::new(providers.video, providers.web)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::results::ContentType;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FakeProvider {
        name: &'static str,
        results: Vec<SearchResult>,
        fail: bool,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn ok(name: &'static str, results: Vec<SearchResult>) -> Arc<Self> {
            Arc::new(Self {
                name,
                results,
                fail: false,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }

        fn slow(name: &'static str, results: Vec<SearchResult>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                name,
                results,
                fail: false,
                delay,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                results: vec![],
                fail: true,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Provider for FakeProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(SearchError::Http(503));
            }
            Ok(self.results.clone())
        }
    }

    fn video(id: &str) -> SearchResult {
        SearchResult::new(id, id, format!("https://www.youtube.com/watch?v={}", id), ContentType::Video)
            .with_engagement(0, 0)
    }

    fn page(id: &str, content_type: ContentType) -> SearchResult {
        SearchResult::new(id, id, format!("https://example.com/{}", id), content_type)
    }

    #[tokio::test]
    async fn test_video_results_come_first() {
        // Web answers first, order must not change
        let video_provider = FakeProvider::slow(
            "youtube",
            vec![video("v1"), video("v2")],
            Duration::from_millis(20),
        );
        let web_provider = FakeProvider::ok(
            "google",
            vec![page("w1", ContentType::Blog), page("w2", ContentType::Academic)],
        );
        let search = Search::new(video_provider.clone(), web_provider.clone());

        let results = search.execute("rust").await.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["v1", "v2", "w1", "w2"]);
        assert!(results.iter().all(|r| r.relevance == 0.0));
        assert_eq!(video_provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(web_provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_any_failure_fails_search() {
        let search = Search::new(
            FakeProvider::failing("youtube"),
            FakeProvider::ok("google", vec![page("w1", ContentType::Blog)]),
        );
        assert!(search.execute("rust").await.is_err());

        let search = Search::new(
            FakeProvider::ok("youtube", vec![video("v1")]),
            FakeProvider::failing("google"),
        );
        assert!(matches!(
            search.execute("rust").await,
            Err(SearchError::Http(503))
        ));
    }

    #[tokio::test]
    async fn test_deterministic() {
        let search = Search::new(
            FakeProvider::ok("youtube", vec![video("v1")]),
            FakeProvider::ok("google", vec![page("w1", ContentType::Article)]),
        );

        let first = search.execute("rust").await.unwrap();
        let second = search.execute("rust").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_both_empty() {
        let search = Search::new(FakeProvider::ok("youtube", vec![]), FakeProvider::ok("google", vec![]));
        assert!(search.execute("nothing").await.unwrap().is_empty());
    }
}
