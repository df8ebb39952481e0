//! HTTP client for the Google Places and Geocoding web services.
//!
//! Wraps `reqwest` with API key management, query-string construction, and
//! typed response deserialization. The client never interprets the
//! provider's `"status"` field; that classification belongs to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::provider::PlacesProvider;
use crate::types::{
    DetailsResponse, GeocodeQuery, GeocodeResponse, NearbyQuery, PlacesPage, TextQuery,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

const GEOCODE_PATH: &str = "geocode/json";
const NEARBY_SEARCH_PATH: &str = "place/nearbysearch/json";
const TEXT_SEARCH_PATH: &str = "place/textsearch/json";
const DETAILS_PATH: &str = "place/details/json";

/// Client for the Google Places and Geocoding APIs.
///
/// Use [`GooglePlacesClient::new`] for production or
/// [`GooglePlacesClient::with_base_url`] to point at a mock server in tests.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GooglePlacesClient {
    /// Creates a new client pointed at the production Google Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so that joining a relative endpoint path
        // appends to the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Geocodes a free-text address, restricted to `query.country`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodeResponse, PlacesError> {
        let components = format!("country:{}", query.country);
        let url = self.build_url(
            GEOCODE_PATH,
            &[
                ("address", query.address.as_str()),
                ("region", query.region.as_str()),
                ("components", components.as_str()),
            ],
        )?;
        self.request_json(GEOCODE_PATH, &url).await
    }

    /// Runs a nearby search around `query.location`.
    ///
    /// `category` is sent as `type`, `page_token` as `pagetoken`; absent or
    /// empty options are left out of the query string.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn nearby_search(&self, query: &NearbyQuery) -> Result<PlacesPage, PlacesError> {
        let location = query.location.to_query_value();
        let radius = query.radius_meters.to_string();
        let mut params = vec![("location", location.as_str()), ("radius", radius.as_str())];
        push_present(&mut params, "type", query.category.as_deref());
        push_present(&mut params, "keyword", query.keyword.as_deref());
        push_present(&mut params, "pagetoken", query.page_token.as_deref());

        let url = self.build_url(NEARBY_SEARCH_PATH, &params)?;
        self.request_json(NEARBY_SEARCH_PATH, &url).await
    }

    /// Runs a free-text search biased towards `query.location`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(&self, query: &TextQuery) -> Result<PlacesPage, PlacesError> {
        let location = query.location.to_query_value();
        let radius = query.radius_meters.to_string();
        let mut params = vec![
            ("query", query.query.as_str()),
            ("location", location.as_str()),
            ("radius", radius.as_str()),
        ];
        push_present(&mut params, "pagetoken", query.page_token.as_deref());

        let url = self.build_url(TEXT_SEARCH_PATH, &params)?;
        self.request_json(TEXT_SEARCH_PATH, &url).await
    }

    /// Fetches the details record for `place_id`, limited to `fields`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<DetailsResponse, PlacesError> {
        let fields = fields.join(",");
        let url = self.build_url(
            DETAILS_PATH,
            &[("place_id", place_id), ("fields", fields.as_str())],
        )?;
        self.request_json(DETAILS_PATH, &url).await
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    ///
    /// The API key is always the first pair.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    ///
    /// `endpoint` is used for logging and error context instead of the full
    /// URL, which carries the API key.
    async fn request_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &Url,
    ) -> Result<T, PlacesError> {
        tracing::debug!(endpoint, "places request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }
}

fn push_present<'a>(params: &mut Vec<(&'a str, &'a str)>, key: &'a str, value: Option<&'a str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key, value));
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodeResponse, PlacesError> {
        GooglePlacesClient::geocode(self, query).await
    }

    async fn nearby_search(&self, query: &NearbyQuery) -> Result<PlacesPage, PlacesError> {
        GooglePlacesClient::nearby_search(self, query).await
    }

    async fn text_search(&self, query: &TextQuery) -> Result<PlacesPage, PlacesError> {
        GooglePlacesClient::text_search(self, query).await
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<DetailsResponse, PlacesError> {
        GooglePlacesClient::place_details(self, place_id, fields).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
