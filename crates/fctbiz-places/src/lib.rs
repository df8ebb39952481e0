//! Client for the Google Places and Geocoding web services.

pub mod client;
pub mod error;
pub mod provider;
pub mod types;

pub use client::GooglePlacesClient;
pub use error::PlacesError;
pub use provider::PlacesProvider;
pub use types::{
    AddressComponent, Business, BusinessDetails, DetailsResponse, GeocodeCandidate, GeocodeQuery,
    GeocodeResponse, Geometry, NearbyQuery, OpeningHours, PlacesPage, ProviderStatus, TextQuery,
};
