//! Mock provider implementation for testing.

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::VideoPlatformProvider;
#[cfg(test)]
use crate::errors::VideoApiError;
#[cfg(test)]
use crate::types::VideoRecord;

/// Mock provider for testing.
///
/// Serves a fixed six-video listing spanning three channels and two
/// categories, truncated to the requested result count.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider;

#[cfg(test)]
impl MockProvider {
    /// Creates a new mock provider for testing.
    pub fn new() -> Self {
        Self
    }

    /// The full fixture listing, in upstream order.
    pub fn fixture_records() -> Vec<VideoRecord> {
        fn record(
            id: &str,
            title: &str,
            channel: &str,
            views: u64,
            category: &str,
            published: &str,
        ) -> VideoRecord {
            VideoRecord {
                id: id.to_string(),
                title: title.to_string(),
                channel_name: channel.to_string(),
                view_count: views,
                thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
                category_id: Some(category.to_string()),
                published_at: Some(published.parse().unwrap()),
            }
        }

        vec![
            record(
                "vid1",
                "Song One (Official Video)",
                "Alpha Music",
                1_000,
                "10",
                "2024-03-01T12:00:00Z",
            ),
            record(
                "vid2",
                "Speedrun World Record",
                "Beta Gaming",
                5_000,
                "20",
                "2024-03-02T12:00:00Z",
            ),
            record(
                "vid3",
                "Song Two",
                "Alpha Music",
                3_000,
                "10",
                "2024-03-03T12:00:00Z",
            ),
            record(
                "vid4",
                "Official Trailer",
                "Gamma Films",
                4_000,
                "24",
                "2024-03-04T12:00:00Z",
            ),
            record(
                "vid5",
                "Boss Fight Guide",
                "Beta Gaming",
                2_000,
                "20",
                "2024-03-05T12:00:00Z",
            ),
            record(
                "vid6",
                "Acoustic Session",
                "Alpha Music",
                500,
                "10",
                "2024-03-06T12:00:00Z",
            ),
        ]
    }
}

#[cfg(test)]
#[async_trait]
impl VideoPlatformProvider for MockProvider {
    async fn list_most_popular(
        &self,
        _region: &str,
        max_results: u8,
    ) -> Result<Vec<VideoRecord>, VideoApiError> {
        Ok(Self::fixture_records()
            .into_iter()
            .take(max_results as usize)
            .collect())
    }

    async fn list_categories(
        &self,
        _region: &str,
    ) -> Result<Vec<(String, String)>, VideoApiError> {
        Ok(vec![
            ("10".to_string(), "Music".to_string()),
            ("20".to_string(), "Gaming".to_string()),
            ("24".to_string(), "Entertainment".to_string()),
        ])
    }
}

/// Provider whose every call fails, for error-path tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FailingProvider;

#[cfg(test)]
#[async_trait]
impl VideoPlatformProvider for FailingProvider {
    async fn list_most_popular(
        &self,
        _region: &str,
        _max_results: u8,
    ) -> Result<Vec<VideoRecord>, VideoApiError> {
        Err(VideoApiError::TrendingFetchFailed {
            details: "connection refused".to_string(),
        })
    }

    async fn list_categories(
        &self,
        _region: &str,
    ) -> Result<Vec<(String, String)>, VideoApiError> {
        Err(VideoApiError::CategoryFetchFailed {
            details: "connection refused".to_string(),
        })
    }
}
