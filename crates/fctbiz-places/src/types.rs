//! Google Places and Geocoding wire types.
//!
//! Response types model the JSON the provider returns. Every response carries
//! a top-level `"status"` string; [`ProviderStatus`] turns it into a closed
//! enumeration with an [`ProviderStatus::Unrecognized`] fallback so that a
//! status the provider adds later never deserializes into a success.
//!
//! Business records are pass-through: they serialize back out with the
//! provider's field names so the HTTP layer can forward them unchanged.

use std::fmt;

use fctbiz_core::LatLng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Top-level `"status"` field of every provider response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProviderStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    UnknownError,
    Unrecognized(String),
}

impl ProviderStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ProviderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "NOT_FOUND" => Self::NotFound,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Places records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// A business as returned by nearby and text search.
///
/// Nearby search fills `vicinity`; text search fills `formatted_address`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub place_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

/// Full record returned by the details endpoint for the requested field mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Response of `place/nearbysearch/json` and `place/textsearch/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesPage {
    pub status: ProviderStatus,
    #[serde(default)]
    pub results: Vec<Business>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Response of `place/details/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    pub status: ProviderStatus,
    #[serde(default)]
    pub result: Option<BusinessDetails>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Response of `geocode/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: ProviderStatus,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// `true` for the state-level component (`administrative_area_level_1`).
    #[must_use]
    pub fn is_first_level_admin_area(&self) -> bool {
        self.types
            .iter()
            .any(|t| t == "administrative_area_level_1")
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Parameters for a geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeQuery {
    pub address: String,
    /// Region bias, e.g. `"ng"`.
    pub region: String,
    /// Country restriction, e.g. `"NG"`; sent as `components=country:NG`.
    pub country: String,
}

/// Parameters for a nearby search. Absent options are not sent.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub location: LatLng,
    pub radius_meters: u32,
    pub category: Option<String>,
    pub keyword: Option<String>,
    pub page_token: Option<String>,
}

/// Parameters for a free-text search.
#[derive(Debug, Clone, PartialEq)]
pub struct TextQuery {
    pub query: String,
    pub location: LatLng,
    pub radius_meters: u32,
    pub page_token: Option<String>,
}
