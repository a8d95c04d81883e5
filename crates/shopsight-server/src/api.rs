use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use shopsight_core::StoreProfile;
use shopsight_scraper::{ScrapeOutcome, StoreScraper};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<StoreScraper>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    service: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "store_unreachable" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/insights", post(fetch_insights))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct InsightsRequest {
    #[serde(default)]
    website_url: String,
}

/// Profiles the storefront named in the request body.
///
/// Unreachable storefronts map to 404, bad input to 400, scraper failures
/// to 500; a successful scrape always carries the full profile shape.
async fn fetch_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<ApiResponse<StoreProfile>>, ApiError> {
    let website_url = req.website_url.trim();
    if website_url.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "website_url must be a non-empty string",
        ));
    }

    match state.scraper.scrape(website_url).await {
        Ok(ScrapeOutcome::Profile(profile)) => Ok(Json(ApiResponse {
            data: *profile,
            meta: ResponseMeta::new(req_id.0),
        })),
        Ok(ScrapeOutcome::Unreachable { status }) => {
            let message = match status {
                Some(code) => format!("the storefront responded with status {code}"),
                None => "the storefront could not be reached".to_string(),
            };
            Err(ApiError::new(req_id.0, "store_unreachable", message))
        }
        Err(e) => {
            tracing::error!(website_url, error = %e, "scrape failed");
            Err(ApiError::new(
                req_id.0,
                "internal_error",
                "scraping failed unexpectedly",
            ))
        }
    }
}

async fn health(Extension(req_id): Extension<RequestId>) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            service: "shopsight",
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
