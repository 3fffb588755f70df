//! JSON API handlers for the dashboard endpoints.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use tubemetrics_api::VideoApiError;

use super::params::{self, DEFAULT_REGION};
use crate::server::AppState;

/// Response type shared by the API handlers.
type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn upstream_failure(error: &VideoApiError) -> (StatusCode, Json<Value>) {
    tracing::warn!("upstream fetch failed: {error}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.summary(), "details": error.details() })),
    )
}

fn region(params: &HashMap<String, String>) -> &str {
    params
        .get("region")
        .map(String::as_str)
        .filter(|region| !region.is_empty())
        .unwrap_or(DEFAULT_REGION)
}

/// Home route for the API.
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Welcome to the TubeMetrics API!" }))
}

/// `GET /api/trending` - trending videos with optional category and
/// publish-date filters.
pub async fn api_trending(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult {
    let max_results = params::parse_max_results(&query).map_err(bad_request)?;
    let date_range = params::parse_date_range(&query).map_err(bad_request)?;
    let category_id = query
        .get("categoryId")
        .map(String::as_str)
        .filter(|id| !id.is_empty());

    let videos = state
        .video_service
        .fetch_trending(region(&query), max_results, category_id, date_range)
        .await
        .map_err(|e| upstream_failure(&e))?;

    Ok(Json(json!(videos)))
}

/// `GET /api/categories` - mapping of category ids to names.
pub async fn api_categories(State(state): State<AppState>) -> ApiResult {
    let categories = state
        .video_service
        .fetch_category_map()
        .await
        .map_err(|e| upstream_failure(&e))?;

    Ok(Json(json!(categories)))
}

/// `GET /api/top-channels` - channels ranked by aggregate trending views,
/// as `[channelName, totalViews]` pairs.
pub async fn api_top_channels(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult {
    let max_results = params::parse_max_results(&query).map_err(bad_request)?;

    let channels = state
        .video_service
        .fetch_top_channels(region(&query), max_results)
        .await
        .map_err(|e| upstream_failure(&e))?;

    let pairs: Vec<_> = channels.iter().map(|c| c.as_pair()).collect();
    Ok(Json(json!(pairs)))
}

/// `GET /api/search` - trending videos filtered by a case-insensitive
/// keyword match against title or channel name.
pub async fn api_search(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult {
    let max_results = params::parse_max_results(&query).map_err(bad_request)?;
    let keyword = query
        .get("query")
        .map(String::as_str)
        .filter(|q| !q.is_empty());

    let videos = state
        .video_service
        .search_videos(region(&query), keyword, max_results)
        .await
        .map_err(|e| upstream_failure(&e))?;

    Ok(Json(json!(videos)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;
    use tubemetrics_api::{VideoDataService, VideoPlatformProvider, VideoRecord};

    use super::*;
    use crate::server::build_router;

    #[derive(Debug)]
    struct FixtureProvider;

    fn record(id: &str, title: &str, channel: &str, views: u64, category: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: title.to_string(),
            channel_name: channel.to_string(),
            view_count: views,
            thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
            category_id: Some(category.to_string()),
            published_at: Some("2024-03-01T12:00:00Z".parse().unwrap()),
        }
    }

    #[async_trait]
    impl VideoPlatformProvider for FixtureProvider {
        async fn list_most_popular(
            &self,
            _region: &str,
            max_results: u8,
        ) -> Result<Vec<VideoRecord>, VideoApiError> {
            let records = vec![
                record("vid1", "Official Music Video", "Alpha Music", 1_000, "10"),
                record("vid2", "Speedrun World Record", "Beta Gaming", 5_000, "20"),
                record("vid3", "Acoustic Session", "Alpha Music", 3_000, "10"),
            ];
            Ok(records.into_iter().take(max_results as usize).collect())
        }

        async fn list_categories(
            &self,
            _region: &str,
        ) -> Result<Vec<(String, String)>, VideoApiError> {
            Ok(vec![
                ("10".to_string(), "Music".to_string()),
                ("20".to_string(), "Gaming".to_string()),
            ])
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

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

    fn router_with(provider: impl VideoPlatformProvider + 'static) -> Router {
        let state = AppState {
            video_service: Arc::new(VideoDataService::with_provider(Box::new(provider))),
        };
        build_router(state)
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_home_returns_welcome_message() {
        let (status, body) = get(router_with(FixtureProvider), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to the TubeMetrics API!");
    }

    #[tokio::test]
    async fn test_trending_returns_camel_case_records() {
        let (status, body) = get(router_with(FixtureProvider), "/api/trending").await;
        assert_eq!(status, StatusCode::OK);

        let videos = body.as_array().unwrap();
        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0]["id"], "vid1");
        assert_eq!(videos[0]["channelName"], "Alpha Music");
        assert_eq!(videos[0]["viewCount"], 1_000);
        assert!(videos[0]["thumbnail"].as_str().unwrap().contains("vid1"));
    }

    #[tokio::test]
    async fn test_trending_honors_max_results() {
        let (status, body) =
            get(router_with(FixtureProvider), "/api/trending?maxResults=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_trending_category_filter() {
        let (status, body) = get(
            router_with(FixtureProvider),
            "/api/trending?categoryId=10&maxResults=5",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let videos = body.as_array().unwrap();
        assert_eq!(videos.len(), 2);
        assert!(videos.iter().all(|v| v["categoryId"] == "10"));
    }

    #[tokio::test]
    async fn test_trending_rejects_out_of_range_max_results() {
        for uri in ["/api/trending?maxResults=0", "/api/trending?maxResults=51"] {
            let (status, body) = get(router_with(FixtureProvider), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "maxResults must be between 1 and 50");
        }
    }

    #[tokio::test]
    async fn test_trending_rejects_non_integer_max_results() {
        let (status, body) =
            get(router_with(FixtureProvider), "/api/trending?maxResults=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "maxResults must be an integer");
    }

    #[tokio::test]
    async fn test_trending_rejects_malformed_dates() {
        let (status, body) = get(
            router_with(FixtureProvider),
            "/api/trending?startDate=not-a-date",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid date format. Please use ISO 8601 format.");
    }

    #[tokio::test]
    async fn test_validation_runs_before_any_upstream_call() {
        // With a provider that always fails, a 400 proves the parameter was
        // rejected before the upstream fetch.
        let (status, body) =
            get(router_with(FailingProvider), "/api/trending?maxResults=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "maxResults must be between 1 and 50");

        let (status, _) =
            get(router_with(FailingProvider), "/api/search?maxResults=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get(
            router_with(FailingProvider),
            "/api/top-channels?maxResults=99",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_categories_returns_id_to_name_object() {
        let (status, body) = get(router_with(FixtureProvider), "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "10": "Music", "20": "Gaming" }));
    }

    #[tokio::test]
    async fn test_top_channels_returns_sorted_pairs() {
        let (status, body) = get(router_with(FixtureProvider), "/api/top-channels").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([["Beta Gaming", 5_000], ["Alpha Music", 4_000]])
        );
    }

    #[tokio::test]
    async fn test_search_filters_by_keyword() {
        let (status, body) =
            get(router_with(FixtureProvider), "/api/search?query=OFFICIAL").await;
        assert_eq!(status, StatusCode::OK);

        let videos = body.as_array().unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0]["id"], "vid1");
    }

    #[tokio::test]
    async fn test_search_without_query_returns_full_listing() {
        let (status, body) = get(router_with(FixtureProvider), "/api/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500_with_details() {
        let (status, body) = get(router_with(FailingProvider), "/api/trending").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch trending videos");
        assert_eq!(body["details"], "connection refused");

        let (status, body) = get(router_with(FailingProvider), "/api/categories").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch categories");
    }
}
