//! Provider implementations for the upstream video platform.

use async_trait::async_trait;

use crate::errors::VideoApiError;
use crate::types::VideoRecord;

pub mod mock;
pub mod youtube;

#[cfg(test)]
pub use mock::MockProvider;
pub use youtube::YouTubeProvider;

/// Trait for upstream video-platform providers.
///
/// Implementations back the service with either the real YouTube Data API or
/// fixture data for tests.
#[async_trait]
pub trait VideoPlatformProvider: Send + Sync + std::fmt::Debug {
    /// Lists the current most-popular videos for a region, requesting up to
    /// `max_results` items. A single upstream page; no pagination.
    ///
    /// # Errors
    ///
    /// - `VideoApiError::TrendingFetchFailed` - Upstream call or response
    ///   parsing failed
    async fn list_most_popular(
        &self,
        region: &str,
        max_results: u8,
    ) -> Result<Vec<VideoRecord>, VideoApiError>;

    /// Lists the video categories known upstream for a region, as
    /// `(id, title)` pairs in upstream order.
    ///
    /// # Errors
    ///
    /// - `VideoApiError::CategoryFetchFailed` - Upstream call or response
    ///   parsing failed
    async fn list_categories(
        &self,
        region: &str,
    ) -> Result<Vec<(String, String)>, VideoApiError>;
}
