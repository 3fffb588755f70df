//! Configuration for the upstream video-platform client.

use std::time::Duration;

use crate::errors::VideoApiError;

/// Settings for talking to the YouTube Data API v3.
///
/// The API key is read once at startup and injected into the provider at
/// construction time, read-only thereafter.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    /// API key sent as the `key` query parameter on every request
    pub api_key: String,
    /// Base URL of the YouTube Data API v3
    pub base_url: String,
    /// HTTP request timeout for upstream calls
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: "tubemetrics/0.1.0",
        }
    }
}

impl YouTubeConfig {
    /// Builds configuration from the process environment.
    ///
    /// Reads `API_KEY` (required) and `YOUTUBE_API_BASE_URL` (optional
    /// override, used to point the client at a stand-in server).
    ///
    /// # Errors
    ///
    /// - `VideoApiError::MissingApiKey` - `API_KEY` is unset or empty
    pub fn from_env() -> Result<Self, VideoApiError> {
        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(VideoApiError::MissingApiKey)?;

        let mut config = Self {
            api_key,
            ..Self::default()
        };
        if let Ok(base_url) = std::env::var("YOUTUBE_API_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        Ok(config)
    }

    /// Creates configuration with an explicit API key and default endpoints.
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }
}
