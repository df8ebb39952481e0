mod businesses;

use std::sync::Arc;

use axum::{
    extract::rejection::QueryRejection,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use fctbiz_search::{SearchError, SearchOrchestrator};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchOrchestrator>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
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
    pub status: &'static str,
    pub code: String,
    pub message: String,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn success(request_id: String, data: T) -> Self {
        Self {
            status: "success",
            data,
            meta: ResponseMeta::new(request_id),
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
            status: "error",
            code: code.into(),
            message: message.into(),
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "not_found" | "location_not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_search_error(request_id: String, error: &SearchError) -> ApiError {
    let code = match error {
        SearchError::Validation(_) => "validation_error",
        SearchError::LocationNotFound { .. } => "location_not_found",
        SearchError::NotFound | SearchError::PlaceNotFound { .. } => "not_found",
        SearchError::Provider(e) => {
            tracing::error!(error = %e, "places provider request failed");
            "upstream_error"
        }
        SearchError::UpstreamStatus(_) => "upstream_error",
    };
    ApiError::new(request_id, code, error.to_string())
}

pub(super) fn map_query_rejection(request_id: String, rejection: &QueryRejection) -> ApiError {
    ApiError::new(request_id, "bad_request", rejection.body_text())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/businesses", get(businesses::list_businesses))
        .route(
            "/api/businesses/search",
            get(businesses::search_businesses_by_text),
        )
        .route(
            "/api/businesses/{place_id}",
            get(businesses::get_business_details),
        )
}

pub fn build_app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(root))
        .route("/api/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn root() -> &'static str {
    "FCT Abuja business search API is running!"
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse::success(req_id.0, HealthData { status: "ok" }))
}
