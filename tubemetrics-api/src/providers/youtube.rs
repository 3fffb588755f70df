//! YouTube Data API v3 provider for production use.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::VideoPlatformProvider;
use crate::config::YouTubeConfig;
use crate::errors::VideoApiError;
use crate::types::VideoRecord;

/// Provider backed by the public YouTube Data API v3.
///
/// Issues one listing request per call and projects the exact subset of
/// upstream fields the dashboard consumes. A response missing a required
/// field fails the whole request rather than producing a partially-filled
/// record.
#[derive(Debug, Clone)]
pub struct YouTubeProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    request_timeout: Duration,
    user_agent: &'static str,
}

/// Response envelope shared by the `videos` and `videoCategories` listings.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Single item from the `videos` listing.
#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: VideoSnippet,
    statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    channel_title: String,
    thumbnails: Thumbnails,
    category_id: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: ThumbnailInfo,
}

#[derive(Debug, Deserialize)]
struct ThumbnailInfo {
    url: String,
}

/// Statistics block; the view count arrives as a decimal string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    view_count: Option<String>,
}

/// Single item from the `videoCategories` listing.
#[derive(Debug, Deserialize)]
struct CategoryItem {
    id: String,
    snippet: CategorySnippet,
}

#[derive(Debug, Deserialize)]
struct CategorySnippet {
    title: String,
}

impl VideoItem {
    fn into_record(self) -> VideoRecord {
        let view_count = self
            .statistics
            .and_then(|stats| stats.view_count)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);

        VideoRecord {
            id: self.id,
            title: self.snippet.title,
            channel_name: self.snippet.channel_title,
            view_count,
            thumbnail: self.snippet.thumbnails.high.url,
            category_id: self.snippet.category_id,
            published_at: self.snippet.published_at,
        }
    }
}

impl YouTubeProvider {
    /// Creates a provider from configuration.
    pub fn new(config: &YouTubeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            request_timeout: config.request_timeout,
            user_agent: config.user_agent,
        }
    }

    async fn fetch_listing<T>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, String>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{endpoint}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .timeout(self.request_timeout)
            .header(reqwest::header::USER_AGENT, self.user_agent)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("upstream returned HTTP {}", response.status()));
        }

        let listing: ListResponse<T> = response
            .json()
            .await
            .map_err(|e| format!("JSON parsing failed: {e}"))?;

        Ok(listing.items)
    }
}

#[async_trait]
impl VideoPlatformProvider for YouTubeProvider {
    async fn list_most_popular(
        &self,
        region: &str,
        max_results: u8,
    ) -> Result<Vec<VideoRecord>, VideoApiError> {
        tracing::debug!("requesting most-popular listing for region {region}");

        let max_results = max_results.to_string();
        let params = [
            ("part", "snippet,statistics"),
            ("chart", "mostPopular"),
            ("regionCode", region),
            ("maxResults", max_results.as_str()),
        ];

        let items: Vec<VideoItem> = self
            .fetch_listing("videos", &params)
            .await
            .map_err(|details| VideoApiError::TrendingFetchFailed { details })?;

        Ok(items.into_iter().map(VideoItem::into_record).collect())
    }

    async fn list_categories(
        &self,
        region: &str,
    ) -> Result<Vec<(String, String)>, VideoApiError> {
        tracing::debug!("requesting category listing for region {region}");

        let params = [("part", "snippet"), ("regionCode", region)];

        let items: Vec<CategoryItem> = self
            .fetch_listing("videoCategories", &params)
            .await
            .map_err(|details| VideoApiError::CategoryFetchFailed { details })?;

        Ok(items
            .into_iter()
            .map(|item| (item.id, item.snippet.title))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_ITEM: &str = r#"{
        "id": "abc123",
        "snippet": {
            "title": "Test Video",
            "channelTitle": "Test Channel",
            "categoryId": "10",
            "publishedAt": "2024-03-01T12:00:00Z",
            "thumbnails": {
                "default": {"url": "https://i.ytimg.com/vi/abc123/default.jpg"},
                "high": {"url": "https://i.ytimg.com/vi/abc123/hqdefault.jpg"}
            }
        },
        "statistics": {"viewCount": "12345", "likeCount": "99"}
    }"#;

    #[test]
    fn test_projects_consumed_field_subset() {
        let item: VideoItem = serde_json::from_str(VIDEO_ITEM).unwrap();
        let record = item.into_record();

        assert_eq!(record.id, "abc123");
        assert_eq!(record.title, "Test Video");
        assert_eq!(record.channel_name, "Test Channel");
        assert_eq!(record.view_count, 12345);
        assert_eq!(record.thumbnail, "https://i.ytimg.com/vi/abc123/hqdefault.jpg");
        assert_eq!(record.category_id.as_deref(), Some("10"));
        assert!(record.published_at.is_some());
    }

    #[test]
    fn test_view_count_defaults_to_zero_without_statistics() {
        let raw = r#"{
            "id": "abc123",
            "snippet": {
                "title": "Test Video",
                "channelTitle": "Test Channel",
                "thumbnails": {"high": {"url": "https://example.com/hq.jpg"}}
            }
        }"#;

        let item: VideoItem = serde_json::from_str(raw).unwrap();
        let record = item.into_record();
        assert_eq!(record.view_count, 0);
        assert!(record.category_id.is_none());
        assert!(record.published_at.is_none());
    }

    #[test]
    fn test_missing_required_thumbnail_is_a_parse_error() {
        let raw = r#"{
            "id": "abc123",
            "snippet": {
                "title": "Test Video",
                "channelTitle": "Test Channel",
                "thumbnails": {"default": {"url": "https://example.com/default.jpg"}}
            }
        }"#;

        assert!(serde_json::from_str::<VideoItem>(raw).is_err());
    }

    #[test]
    fn test_listing_envelope_defaults_to_empty_items() {
        let listing: ListResponse<VideoItem> = serde_json::from_str("{}").unwrap();
        assert!(listing.items.is_empty());
    }

    #[test]
    fn test_category_item_projection() {
        let raw = r#"{"id": "10", "snippet": {"title": "Music", "assignable": true}}"#;
        let item: CategoryItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, "10");
        assert_eq!(item.snippet.title, "Music");
    }
}
