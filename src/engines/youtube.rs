//! YouTube Data API v3 engine implementation

use super::traits::*;
use crate::config::YouTubeSettings;
use crate::error::{Result, SearchError};
use crate::results::{ContentType, SearchResult};
use serde::Deserialize;

/// YouTube video search engine
pub struct YouTube {
    base_url: String,
    api_key: String,
}

impl YouTube {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_settings(&YouTubeSettings {
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    pub fn from_settings(settings: &YouTubeSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Watch page for a video id
    fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", video_id)
    }

    fn to_result(item: SearchItem) -> SearchResult {
        let video_id = item.id.unwrap_or_default().video_id.unwrap_or_default();
        let snippet = item.snippet.unwrap_or_default();
        let link = Self::watch_url(&video_id);

        // Statistics are not requested from the API, so counts stay at zero
        SearchResult::new(
            video_id,
            snippet.title.unwrap_or_default(),
            link,
            ContentType::Video,
        )
        .with_description(snippet.description.unwrap_or_default())
        .with_engagement(0, 0)
    }
}

impl Engine for YouTube {
    fn name(&self) -> &str {
        "youtube"
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new().api_key_required(true)
    }

    fn request(&self, params: &RequestParams) -> Result<EngineRequest> {
        if self.api_key.is_empty() {
            return Err(SearchError::MissingCredentials("YOUTUBE_API_KEY"));
        }

        Ok(EngineRequest::get(&self.base_url)
            .param("part", "snippet")
            .param("q", params.query.clone())
            .param("type", "video")
            .param("maxResults", params.max_results.to_string())
            .param("key", self.api_key.clone()))
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<SearchResult>> {
        response.error_for_status()?;

        let body: SearchListResponse = response.json()?;
        Ok(body
            .items
            .unwrap_or_default()
            .into_iter()
            .map(Self::to_result)
            .collect())
    }
}

/// `search.list` response body, reduced to what we read
#[derive(Debug, Default, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchItem {
    id: Option<ResourceId>,
    snippet: Option<Snippet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    title: Option<String>,
    description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_response(body: serde_json::Value) -> EngineResponse {
        EngineResponse {
            status: 200,
            text: body.to_string(),
        }
    }

    #[test]
    fn test_youtube_request() {
        let youtube = YouTube::new("secret");
        let params = RequestParams::new("rust programming");
        let request = youtube.request(&params).unwrap();

        assert!(request.url.contains("youtube/v3/search"));
        assert_eq!(request.get_param("q"), Some("rust programming"));
        assert_eq!(request.get_param("part"), Some("snippet"));
        assert_eq!(request.get_param("type"), Some("video"));
        assert_eq!(request.get_param("maxResults"), Some("10"));
        assert_eq!(request.get_param("key"), Some("secret"));
    }

    #[test]
    fn test_missing_api_key() {
        let youtube = YouTube::new("");
        let err = youtube.request(&RequestParams::new("rust")).unwrap_err();
        assert!(matches!(err, SearchError::MissingCredentials("YOUTUBE_API_KEY")));
    }

    #[test]
    fn test_parse_items() {
        let youtube = YouTube::new("secret");
        let results = youtube
            .response(ok_response(json!({
                "items": [
                    {
                        "id": {"kind": "youtube#video", "videoId": "abc123"},
                        "snippet": {"title": "Learn Rust", "description": "A tour"}
                    }
                ]
            })))
            .unwrap();

        assert_eq!(results.len(), 1);
        let video = &results[0];
        assert_eq!(video.id, "abc123");
        assert_eq!(video.title, "Learn Rust");
        assert_eq!(video.description, "A tour");
        assert_eq!(video.link, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(video.content_type, ContentType::Video);
        assert_eq!(video.views, Some(0));
        assert_eq!(video.likes, Some(0));
        assert_eq!(video.relevance, 0.0);
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let youtube = YouTube::new("secret");
        let results = youtube
            .response(ok_response(json!({
                "items": [ {}, {"id": {}, "snippet": {"title": "Only title"}} ]
            })))
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "");
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].link, "https://www.youtube.com/watch?v=");
        assert_eq!(results[1].title, "Only title");
        assert_eq!(results[1].description, "");
    }

    #[test]
    fn test_no_items_is_empty() {
        let youtube = YouTube::new("secret");
        let results = youtube.response(ok_response(json!({"kind": "youtube#searchListResponse"}))).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_null_items_and_snippet() {
        let youtube = YouTube::new("secret");
        assert!(youtube.response(ok_response(json!({"items": null}))).unwrap().is_empty());

        let results = youtube
            .response(ok_response(json!({
                "items": [{"id": null, "snippet": {"title": null, "description": null}}]
            })))
            .unwrap();
        assert_eq!(results[0].id, "");
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].description, "");
    }

    #[test]
    fn test_forbidden_is_auth_failure() {
        let youtube = YouTube::new("secret");
        let response = EngineResponse {
            status: 403,
            text: r#"{"error": {"code": 403}}"#.to_string(),
        };
        assert!(matches!(
            youtube.response(response),
            Err(SearchError::AuthFailed(403))
        ));
    }
}
