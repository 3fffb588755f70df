//! Data types for the trending video service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single trending video, projected from the upstream listing.
///
/// Immutable once constructed; lives only for the duration of one
/// request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Upstream video id
    pub id: String,
    /// Video title
    pub title: String,
    /// Name of the channel that published the video
    pub channel_name: String,
    /// View count, 0 when the upstream statistics block is absent
    pub view_count: u64,
    /// High-resolution thumbnail URL
    pub thumbnail: String,
    /// Upstream category id, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Publish timestamp, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Mapping from category id to human-readable category name.
///
/// A `BTreeMap` keeps the serialized key order deterministic.
pub type CategoryMap = BTreeMap<String, String>;

/// Aggregate view total for a single channel across the trending listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAggregate {
    /// Channel display name
    pub channel_name: String,
    /// Sum of view counts across the channel's trending videos
    pub total_views: u64,
}

impl ChannelAggregate {
    /// Projects the aggregate into the `[channelName, totalViews]` wire pair
    /// the top-channels endpoint returns.
    pub fn as_pair(&self) -> (&str, u64) {
        (&self.channel_name, self.total_views)
    }
}

/// Inclusive publish-timestamp interval used to filter trending results.
///
/// Ordering of the bounds is not validated; an inverted range matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Inclusive upper bound
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Whether `timestamp` falls inside the range, inclusive on both ends.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}
