//! HTTP request handlers

use super::state::AppState;
use crate::error::SearchError;
use crate::results::{ContentType, SearchResult};
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tera::Context;

/// Error returned to API callers
///
/// Provider failures are logged with their cause, but callers only ever see
/// the fixed message.
#[derive(Debug)]
pub enum ApiError {
    /// `term` was missing, empty or repeated
    MissingTerm,
    /// A provider failed
    SearchFailed(SearchError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingTerm => StatusCode::BAD_REQUEST,
            Self::SearchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingTerm => "Search term is required",
            Self::SearchFailed(_) => "An error occurred while searching",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::SearchFailed(ref e) = self {
            tracing::error!(kind = e.kind(), "Search error: {}", e);
        }
        (
            self.status(),
            Json(serde_json::json!({ "error": self.message() })),
        )
            .into_response()
    }
}

/// Pull a single, non-empty `term` out of the raw query string
fn extract_term(raw_query: Option<&str>) -> Option<String> {
    let raw_query = raw_query?;
    let mut values = url::form_urlencoded::parse(raw_query.as_bytes())
        .filter(|(key, _)| key == "term")
        .map(|(_, value)| value.into_owned());

    let term = values.next()?;
    if term.is_empty() || values.next().is_some() {
        return None;
    }
    Some(term)
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let categories: Vec<&str> = ContentType::ALL.iter().map(|t| t.as_str()).collect();

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("categories", &categories);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Search API handler
pub async fn search(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let term = extract_term(raw_query.as_deref()).ok_or(ApiError::MissingTerm)?;

    let results = state
        .search
        .execute(&term)
        .await
        .map_err(ApiError::SearchFailed)?;

    Ok(Json(results))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
