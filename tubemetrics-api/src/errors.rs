//! Error types for the video data service.

use thiserror::Error;

/// Errors that can occur while fetching or reshaping upstream video data.
#[derive(Debug, Error)]
pub enum VideoApiError {
    /// Upstream most-popular listing could not be fetched or parsed.
    #[error("Failed to fetch trending videos: {details}")]
    TrendingFetchFailed {
        /// The underlying transport or parse error text
        details: String,
    },

    /// Upstream category listing could not be fetched or parsed.
    #[error("Failed to fetch categories: {details}")]
    CategoryFetchFailed {
        /// The underlying transport or parse error text
        details: String,
    },

    /// No API key was available when building the configuration.
    #[error("API_KEY environment variable is not set")]
    MissingApiKey,
}

impl VideoApiError {
    /// Fixed human-readable summary, without the underlying error text.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::TrendingFetchFailed { .. } => "Failed to fetch trending videos",
            Self::CategoryFetchFailed { .. } => "Failed to fetch categories",
            Self::MissingApiKey => "API key is not configured",
        }
    }

    /// Underlying error text, suitable for a `details` response field.
    pub fn details(&self) -> &str {
        match self {
            Self::TrendingFetchFailed { details } | Self::CategoryFetchFailed { details } => {
                details
            }
            Self::MissingApiKey => "set the API_KEY environment variable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_details() {
        let error = VideoApiError::TrendingFetchFailed {
            details: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch trending videos: connection refused"
        );
    }

    #[test]
    fn test_summary_and_details_split() {
        let error = VideoApiError::CategoryFetchFailed {
            details: "HTTP 403 Forbidden".to_string(),
        };
        assert_eq!(error.summary(), "Failed to fetch categories");
        assert_eq!(error.details(), "HTTP 403 Forbidden");
    }
}
