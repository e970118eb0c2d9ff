//! YouTube Data API v3 access.
//!
//! Only two read-only endpoints are used: the `mostPopular` video chart and
//! the video category lookup. Both authenticate with a static API key.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::TrendsConfig,
    error::{Result, TrendsError},
    selection::Region,
    types::VideoRecord,
};

/// Largest page the `mostPopular` chart returns. No further pages are requested.
pub const MAX_RESULTS: u32 = 50;

const API_KEY_HEADER: &str = "X-Goog-Api-Key";

#[async_trait]
pub trait VideoPlatform: Send + Sync {
    async fn most_popular(&self, region_code: &str, max_results: u32) -> Result<Vec<VideoRecord>>;

    /// Map category ids to display names. Ids the platform does not know are
    /// absent from the result.
    async fn video_categories(&self, ids: &[String]) -> Result<HashMap<String, String>>;
}

pub struct YouTubeClient {
    client: Client,
    config: TrendsConfig,
}

impl YouTubeClient {
    pub fn new(config: TrendsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T>(&self, endpoint: &'static str, params: &[(&str, &str)]) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        tracing::debug!(%url, ?params, "requesting");

        // The key travels in a header so it never shows up in request URLs.
        let response = self
            .client
            .get(&url)
            .query(params)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .send()
            .await
            .map_err(|e| TrendsError::ApiError(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TrendsError::ApiError(e.without_url()))?;
        if !status.is_success() {
            tracing::error!(endpoint, %status, "non-success response from YouTube");
            return Err(TrendsError::ApiStatus {
                endpoint,
                status,
                body: api_error_message(status, &body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl VideoPlatform for YouTubeClient {
    async fn most_popular(&self, region_code: &str, max_results: u32) -> Result<Vec<VideoRecord>> {
        let max_results = max_results.min(MAX_RESULTS).to_string();
        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet"),
                    ("chart", "mostPopular"),
                    ("regionCode", region_code),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(response.items.into_iter().map(VideoItem::into_record).collect())
    }

    async fn video_categories(&self, ids: &[String]) -> Result<HashMap<String, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let joined = ids.join(",");
        let response: CategoryListResponse = self
            .get_json("videoCategories", &[("part", "snippet"), ("id", joined.as_str())])
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| Some((item.id, item.snippet?.title?)))
            .collect())
    }
}

/// Fetch the current trending chart for `region`.
pub async fn fetch_trending(
    platform: &dyn VideoPlatform,
    region: Region,
) -> Result<Vec<VideoRecord>> {
    let records = platform
        .most_popular(region.region_code(), MAX_RESULTS)
        .await?;
    tracing::info!(
        region = region.region_code(),
        count = records.len(),
        "fetched trending videos"
    );
    Ok(records)
}

/// Resolve all `ids` with a single batched lookup.
pub async fn resolve_category_names(
    platform: &dyn VideoPlatform,
    ids: &[String],
) -> Result<HashMap<String, String>> {
    let names = platform.video_categories(ids).await?;
    if names.len() < ids.len() {
        tracing::warn!(
            requested = ids.len(),
            resolved = names.len(),
            "some categories were not recognized"
        );
    }
    Ok(names)
}

// Pull `error.message` out of a Google API error body when there is one.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(e) = serde_json::from_str::<ApiErrorResponse>(body) {
        return e.error.message;
    }
    match body.trim() {
        "" => status
            .canonical_reason()
            .unwrap_or("empty response body")
            .to_string(),
        text => text.to_string(),
    }
}

// ── API response shapes ──

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    #[serde(default)]
    id: String,
    snippet: Option<VideoSnippet>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    category_id: Option<String>,
    title: Option<String>,
    published_at: Option<String>,
}

impl VideoItem {
    fn into_record(self) -> VideoRecord {
        let (category_id, title, published_at) = match self.snippet {
            Some(s) => (s.category_id, s.title, s.published_at),
            None => (None, None, None),
        };
        VideoRecord {
            id: self.id,
            category_id,
            title,
            published_at,
        }
    }
}

#[derive(Deserialize)]
struct CategoryListResponse {
    #[serde(default)]
    items: Vec<CategoryItem>,
}

#[derive(Deserialize)]
struct CategoryItem {
    id: String,
    snippet: Option<CategorySnippet>,
}

#[derive(Deserialize)]
struct CategorySnippet {
    title: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_item_without_snippet_has_no_fields() {
        let item: VideoItem = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        let record = item.into_record();
        assert_eq!(record.id, "abc");
        assert_eq!(record.category_id, None);
        assert_eq!(record.title, None);
        assert_eq!(record.published_at, None);
    }

    #[test]
    fn test_video_snippet_uses_camel_case_fields() {
        let item: VideoItem = serde_json::from_str(
            r#"{"id": "v1", "snippet": {"categoryId": "10", "title": "Song", "publishedAt": "2025-01-01T00:00:00Z"}}"#,
        )
        .unwrap();
        let record = item.into_record();
        assert_eq!(record.category_id.as_deref(), Some("10"));
        assert_eq!(record.title.as_deref(), Some("Song"));
        assert_eq!(record.published_at.as_deref(), Some("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn test_api_error_message_prefers_google_error_body() {
        let status = reqwest::StatusCode::FORBIDDEN;
        let body = r#"{"error": {"code": 403, "message": "quotaExceeded"}}"#;
        assert_eq!(api_error_message(status, body), "quotaExceeded");
        assert_eq!(api_error_message(status, "  gateway timeout\n"), "gateway timeout");
    }

    #[test]
    fn test_empty_error_body_falls_back_to_status_text() {
        assert_eq!(api_error_message(reqwest::StatusCode::FORBIDDEN, ""), "Forbidden");
        assert_eq!(
            api_error_message(reqwest::StatusCode::BAD_GATEWAY, " \n "),
            "Bad Gateway"
        );
    }
}
