//! TubeMetrics Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Pure JSON API server over the trending-video service. Provides the
//! dashboard endpoints for trending listings, category names, top channels,
//! and keyword search.

pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, build_router, run_server};
