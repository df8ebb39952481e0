//! In-memory `PlacesProvider` that returns canned responses and records
//! every outbound call.

use std::sync::Mutex;

use async_trait::async_trait;
use fctbiz_places::{
    DetailsResponse, GeocodeQuery, GeocodeResponse, NearbyQuery, PlacesError, PlacesPage,
    PlacesProvider, TextQuery,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Geocode(GeocodeQuery),
    Nearby(NearbyQuery),
    Text(TextQuery),
    Details { place_id: String, fields: Vec<String> },
}

pub(crate) struct FakeProvider {
    geocode: serde_json::Value,
    page: serde_json::Value,
    details: serde_json::Value,
    fail_geocode: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self {
            geocode: serde_json::json!({ "status": "ZERO_RESULTS", "results": [] }),
            page: serde_json::json!({ "status": "ZERO_RESULTS", "results": [] }),
            details: serde_json::json!({ "status": "NOT_FOUND" }),
            fail_geocode: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_geocode(mut self, body: serde_json::Value) -> Self {
        self.geocode = body;
        self
    }

    pub(crate) fn with_page(mut self, body: serde_json::Value) -> Self {
        self.page = body;
        self
    }

    pub(crate) fn with_details(mut self, body: serde_json::Value) -> Self {
        self.details = body;
        self
    }

    pub(crate) fn failing_geocode(mut self) -> Self {
        self.fail_geocode = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Geocode body whose top result sits in the given first-level admin area.
pub(crate) fn geocode_hit(lat: f64, lng: f64, admin_long: &str, admin_short: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [{
            "formatted_address": format!("Somewhere, {admin_long}, Nigeria"),
            "geometry": { "location": { "lat": lat, "lng": lng } },
            "address_components": [
                { "long_name": "Somewhere", "short_name": "Somewhere", "types": ["locality", "political"] },
                { "long_name": admin_long, "short_name": admin_short, "types": ["administrative_area_level_1", "political"] },
                { "long_name": "Nigeria", "short_name": "NG", "types": ["country", "political"] }
            ]
        }]
    })
}

pub(crate) fn ok_page(names: &[&str], next_page_token: Option<&str>) -> serde_json::Value {
    let results: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| serde_json::json!({ "place_id": format!("place-{i}"), "name": name }))
        .collect();
    serde_json::json!({
        "status": "OK",
        "results": results,
        "next_page_token": next_page_token,
    })
}

fn decode<T: serde::de::DeserializeOwned>(body: &serde_json::Value) -> Result<T, PlacesError> {
    serde_json::from_value(body.clone()).map_err(|e| PlacesError::Deserialize {
        context: "fake".to_owned(),
        source: e,
    })
}

#[async_trait]
impl PlacesProvider for FakeProvider {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodeResponse, PlacesError> {
        self.record(Call::Geocode(query.clone()));
        if self.fail_geocode {
            return Err(PlacesError::Deserialize {
                context: "geocode/json".to_owned(),
                source: serde_json::from_str::<()>("<html>").unwrap_err(),
            });
        }
        decode(&self.geocode)
    }

    async fn nearby_search(&self, query: &NearbyQuery) -> Result<PlacesPage, PlacesError> {
        self.record(Call::Nearby(query.clone()));
        decode(&self.page)
    }

    async fn text_search(&self, query: &TextQuery) -> Result<PlacesPage, PlacesError> {
        self.record(Call::Text(query.clone()));
        decode(&self.page)
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<DetailsResponse, PlacesError> {
        self.record(Call::Details {
            place_id: place_id.to_owned(),
            fields: fields.iter().map(|f| (*f).to_owned()).collect(),
        });
        decode(&self.details)
    }
}
