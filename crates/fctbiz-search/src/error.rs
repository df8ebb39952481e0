use fctbiz_places::{PlacesError, ProviderStatus};
use thiserror::Error;

/// Errors surfaced by [`crate::SearchOrchestrator`].
///
/// None of these are retried; each one ends the current call.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request is incomplete. Every violated rule is listed.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The keyword did not geocode to a location inside the target region.
    #[error("Location \"{keyword}\" not found in {region}.")]
    LocationNotFound { keyword: String, region: String },

    /// Transport failure talking to the provider.
    #[error(transparent)]
    Provider(#[from] PlacesError),

    /// The provider answered a details lookup with a non-`OK` status.
    #[error("Google Places API error: {0}")]
    UpstreamStatus(ProviderStatus),

    /// Empty place identifier.
    #[error("Place ID is required")]
    NotFound,

    /// The provider answered `OK` but returned no record for the id.
    #[error("Place \"{place_id}\" not found")]
    PlaceNotFound { place_id: String },
}
