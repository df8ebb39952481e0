//! The seam between search orchestration and the places provider.

use async_trait::async_trait;

use crate::error::PlacesError;
use crate::types::{
    DetailsResponse, GeocodeQuery, GeocodeResponse, NearbyQuery, PlacesPage, TextQuery,
};

/// Outbound operations against a places/geocoding provider.
///
/// [`crate::GooglePlacesClient`] is the production implementation; tests
/// substitute in-memory doubles. Implementations return the provider's
/// response as-is, including non-`OK` statuses.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodeResponse, PlacesError>;

    async fn nearby_search(&self, query: &NearbyQuery) -> Result<PlacesPage, PlacesError>;

    async fn text_search(&self, query: &TextQuery) -> Result<PlacesPage, PlacesError>;

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<DetailsResponse, PlacesError>;
}
