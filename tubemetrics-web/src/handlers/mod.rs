//! HTTP request handlers organized by functionality

pub mod api;
pub mod params;

// Re-export handler functions
pub use api::{api_categories, api_search, api_top_channels, api_trending, home};
pub use params::{DayEdge, parse_date_range, parse_iso_timestamp, parse_max_results};
