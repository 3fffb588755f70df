//! TubeMetrics API - Trending video data service

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Fetches the current most-popular listing from the YouTube Data API v3,
//! reshapes it into dashboard-friendly records, and provides the filtering
//! and per-channel aggregation the HTTP endpoints are built on.

pub mod config;
pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use config::YouTubeConfig;
pub use errors::VideoApiError;
pub use providers::VideoPlatformProvider;
pub use service::VideoDataService;
pub use types::{CategoryMap, ChannelAggregate, DateRange, VideoRecord};

/// Convenience type alias for Results with VideoApiError.
pub type Result<T> = std::result::Result<T, VideoApiError>;
