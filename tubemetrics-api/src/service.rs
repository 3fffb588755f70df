//! Trending video fetching, filtering, and aggregation.

use std::collections::HashMap;

use crate::config::YouTubeConfig;
use crate::errors::VideoApiError;
use crate::providers::{VideoPlatformProvider, YouTubeProvider};
use crate::types::{CategoryMap, ChannelAggregate, DateRange, VideoRecord};

/// Region the upstream category listing is queried for.
///
/// The categories endpoint exposes no region parameter; the upstream call is
/// pinned to "US" regardless of the region used for trending fetches.
const CATEGORY_REGION: &str = "US";

/// Video data service providing trending listings, category names, keyword
/// search, and per-channel aggregation over a single upstream fetch.
///
/// Stateless: every operation is a one-shot request/transform/respond cycle
/// with no caching between calls.
#[derive(Debug)]
pub struct VideoDataService {
    provider: Box<dyn VideoPlatformProvider>,
}

impl VideoDataService {
    /// Creates a service backed by the real YouTube Data API.
    pub fn new(config: &YouTubeConfig) -> Self {
        Self {
            provider: Box::new(YouTubeProvider::new(config)),
        }
    }

    /// Creates a service over an arbitrary provider implementation.
    pub fn with_provider(provider: Box<dyn VideoPlatformProvider>) -> Self {
        Self { provider }
    }

    /// Fetches the current most-popular listing for `region` and applies the
    /// optional category and publish-date filters.
    ///
    /// The upstream is called exactly once; filters only narrow that single
    /// page, so the result may be shorter than `max_results` but never
    /// longer, and upstream order is preserved.
    ///
    /// # Errors
    ///
    /// - `VideoApiError::TrendingFetchFailed` - Upstream call or response
    ///   parsing failed
    pub async fn fetch_trending(
        &self,
        region: &str,
        max_results: u8,
        category_id: Option<&str>,
        date_range: Option<DateRange>,
    ) -> Result<Vec<VideoRecord>, VideoApiError> {
        let records = self.provider.list_most_popular(region, max_results).await?;
        tracing::debug!(
            "fetched {} trending videos for region {region}",
            records.len()
        );

        Ok(records
            .into_iter()
            .filter(|record| match category_id {
                Some(wanted) => record.category_id.as_deref() == Some(wanted),
                None => true,
            })
            .filter(|record| match (date_range, record.published_at) {
                (Some(range), Some(published)) => range.contains(published),
                // A record without a publish timestamp cannot fall inside
                // the requested interval.
                (Some(_), None) => false,
                (None, _) => true,
            })
            .collect())
    }

    /// Fetches the upstream category listing and folds it into an id→name
    /// map. Later entries override earlier ones with the same id.
    ///
    /// # Errors
    ///
    /// - `VideoApiError::CategoryFetchFailed` - Upstream call or response
    ///   parsing failed
    pub async fn fetch_category_map(&self) -> Result<CategoryMap, VideoApiError> {
        let pairs = self.provider.list_categories(CATEGORY_REGION).await?;

        let mut map = CategoryMap::new();
        for (id, title) in pairs {
            map.insert(id, title);
        }
        Ok(map)
    }

    /// Groups the unfiltered trending listing by channel, summing view
    /// counts, sorted by total views descending.
    ///
    /// Ties sort by channel name ascending so the ordering is deterministic
    /// across runs.
    ///
    /// # Errors
    ///
    /// - `VideoApiError::TrendingFetchFailed` - Upstream call or response
    ///   parsing failed
    pub async fn fetch_top_channels(
        &self,
        region: &str,
        max_results: u8,
    ) -> Result<Vec<ChannelAggregate>, VideoApiError> {
        let records = self.fetch_trending(region, max_results, None, None).await?;

        let mut totals: HashMap<String, u64> = HashMap::new();
        for record in records {
            *totals.entry(record.channel_name).or_insert(0) += record.view_count;
        }

        let mut channels: Vec<ChannelAggregate> = totals
            .into_iter()
            .map(|(channel_name, total_views)| ChannelAggregate {
                channel_name,
                total_views,
            })
            .collect();

        channels.sort_by(|a, b| {
            b.total_views
                .cmp(&a.total_views)
                .then_with(|| a.channel_name.cmp(&b.channel_name))
        });

        Ok(channels)
    }

    /// Filters the unfiltered trending listing by a case-insensitive
    /// substring match against title or channel name.
    ///
    /// An absent or empty query returns the trending listing unchanged.
    ///
    /// # Errors
    ///
    /// - `VideoApiError::TrendingFetchFailed` - Upstream call or response
    ///   parsing failed
    pub async fn search_videos(
        &self,
        region: &str,
        query: Option<&str>,
        max_results: u8,
    ) -> Result<Vec<VideoRecord>, VideoApiError> {
        let records = self.fetch_trending(region, max_results, None, None).await?;

        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return Ok(records);
        };

        let needle = query.to_lowercase();
        Ok(records
            .into_iter()
            .filter(|record| {
                record.title.to_lowercase().contains(&needle)
                    || record.channel_name.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
