//! News proxy and search endpoints

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use newsdesk_services::SearchError;

use crate::upstream::DEFAULT_DISPLAY;
use crate::AppState;

/// Query parameters for the passthrough endpoints
#[derive(Debug, Deserialize)]
pub struct SourceQuery {
    /// Search keyword
    pub q: String,
    /// Page size forwarded to the JSON upstream
    pub display: Option<u32>,
}

/// Query parameters for ranked search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search keyword
    pub q: Option<String>,
}

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news/json-source", get(json_source))
        .route("/news/xml-source", get(xml_source))
        .route("/news/search", get(search_news))
}

/// GET /news/json-source?q=...&display=... - Naver news passthrough
async fn json_source(
    State(state): State<AppState>,
    Query(params): Query<SourceQuery>,
) -> impl IntoResponse {
    let display = params.display.unwrap_or(DEFAULT_DISPLAY);

    match state.upstream.fetch_json_news(&params.q, display).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => {
            error!("Naver news proxy failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "네이버 뉴스 API 호출 실패"
                })),
            )
                .into_response()
        }
    }
}

/// GET /news/xml-source?q=... - Google News RSS passthrough
async fn xml_source(
    State(state): State<AppState>,
    Query(params): Query<SourceQuery>,
) -> impl IntoResponse {
    match state.upstream.fetch_xml_news(&params.q).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Google News proxy failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "구글 뉴스 API 호출 실패"
                })),
            )
                .into_response()
        }
    }
}

/// GET /news/search?q=... - Aggregated, ranked keyword search
async fn search_news(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let keyword = params.q.unwrap_or_default();

    match state.search.search(&keyword).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(SearchError::EmptyKeyword) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Query parameter is required"
            })),
        )
            .into_response(),
    }
}
