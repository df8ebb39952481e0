use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use fctbiz_core::LatLng;
use fctbiz_places::{Business, BusinessDetails};
use fctbiz_search::{SearchOutcome, SearchRequest, TextSearchRequest};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_query_rejection, map_search_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BusinessesQuery {
    #[serde(default)]
    keyword: String,
    #[serde(default, rename = "type")]
    category: String,
    page_token: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    should_fetch: Option<String>,
}

impl BusinessesQuery {
    fn into_request(self) -> SearchRequest {
        let page_token = self.page_token.filter(|t| !t.is_empty());
        let should_execute = self.should_fetch.as_deref() == Some("true") || page_token.is_some();
        SearchRequest {
            keyword: self.keyword,
            category: self.category,
            page_token,
            location: location_from(self.lat, self.lng),
            should_execute,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TextSearchQuery {
    #[serde(default)]
    query: String,
    page_token: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    radius: Option<u32>,
}

impl TextSearchQuery {
    fn into_request(self) -> TextSearchRequest {
        TextSearchRequest {
            query: self.query,
            page_token: self.page_token,
            location: location_from(self.lat, self.lng),
            radius_meters: self.radius.filter(|r| *r > 0),
        }
    }
}

/// Coordinates are only honoured when both halves are present.
fn location_from(lat: Option<f64>, lng: Option<f64>) -> Option<LatLng> {
    lat.zip(lng).map(|(lat, lng)| LatLng::new(lat, lng))
}

#[derive(Debug, Serialize)]
pub(super) struct SearchPage {
    pub results: Vec<Business>,
    pub next_page_token: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

fn into_page(request_id: String, outcome: SearchOutcome) -> Result<SearchPage, ApiError> {
    match outcome {
        SearchOutcome::Success {
            results,
            next_page_token,
        } => Ok(SearchPage {
            total_results: results.len(),
            results,
            next_page_token,
        }),
        SearchOutcome::Empty => Ok(SearchPage {
            results: Vec::new(),
            next_page_token: None,
            total_results: 0,
        }),
        SearchOutcome::Error { status } => Err(ApiError::new(
            request_id,
            "upstream_error",
            format!("Google Places API error: {status}"),
        )),
    }
}

pub(super) async fn list_businesses(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<BusinessesQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<SearchPage>>, ApiError> {
    let Query(query) = query.map_err(|e| map_query_rejection(req_id.0.clone(), &e))?;
    let request = query.into_request();

    let outcome = state
        .search
        .search_nearby(&request)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    let page = into_page(req_id.0.clone(), outcome)?;
    Ok(Json(ApiResponse::success(req_id.0, page)))
}

pub(super) async fn search_businesses_by_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<TextSearchQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<SearchPage>>, ApiError> {
    let Query(query) = query.map_err(|e| map_query_rejection(req_id.0.clone(), &e))?;
    let request = query.into_request();

    let outcome = state
        .search
        .search_by_text(&request)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    let page = into_page(req_id.0.clone(), outcome)?;
    Ok(Json(ApiResponse::success(req_id.0, page)))
}

pub(super) async fn get_business_details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(place_id): Path<String>,
) -> Result<Json<ApiResponse<BusinessDetails>>, ApiError> {
    let details = state
        .search
        .get_details(&place_id)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::success(req_id.0, details)))
}
