//! The fixed metropolitan region every search is scoped to.

use crate::LatLng;

/// Static description of the target region.
///
/// Built once at startup and shared read-only by the resolver and the
/// orchestrator. [`RegionConfig::default`] describes the Federal Capital
/// Territory, Abuja.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionConfig {
    /// Human-readable name used in error messages.
    pub name: String,
    /// Search center used when a request carries no explicit coordinates.
    pub center: LatLng,
    pub radius_meters: u32,
    /// Appended to place names before geocoding.
    pub geocode_suffix: String,
    /// Appended to free-text queries before a text search.
    pub text_suffix: String,
    /// ISO 3166-1 alpha-2 country code used to restrict geocoding candidates.
    pub country_code: String,
    /// Substrings accepted in the long name of the first-level
    /// administrative area of a geocode hit.
    pub admin_area_names: Vec<String>,
    /// Exact short names accepted for the same component.
    pub admin_area_short_names: Vec<String>,
    /// Category sentinel meaning "no category filter".
    pub wildcard_category: String,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            name: "FCT, Abuja".to_owned(),
            center: LatLng::new(9.0765, 7.3986),
            radius_meters: 5_000,
            geocode_suffix: ", FCT, Abuja, Nigeria".to_owned(),
            text_suffix: " in FCT Abuja Nigeria".to_owned(),
            country_code: "NG".to_owned(),
            admin_area_names: vec!["Federal Capital Territory".to_owned(), "FCT".to_owned()],
            admin_area_short_names: vec!["FCT".to_owned()],
            wildcard_category: "all".to_owned(),
        }
    }
}

impl RegionConfig {
    /// Returns `true` when an administrative-area component with the given
    /// names identifies this region.
    #[must_use]
    pub fn matches_admin_area(&self, long_name: &str, short_name: &str) -> bool {
        self.admin_area_names
            .iter()
            .any(|name| long_name.contains(name.as_str()))
            || self
                .admin_area_short_names
                .iter()
                .any(|name| name == short_name)
    }

    /// Returns `true` for the wildcard sentinel ("search all categories").
    #[must_use]
    pub fn is_wildcard(&self, category: &str) -> bool {
        category == self.wildcard_category
    }

    /// Address string sent to the geocoder for a place name.
    #[must_use]
    pub fn geocode_address(&self, place_name: &str) -> String {
        format!("{place_name}{}", self.geocode_suffix)
    }

    /// Query string sent to the provider's free-text search.
    #[must_use]
    pub fn text_query(&self, query: &str) -> String {
        format!("{query}{}", self.text_suffix)
    }

    /// Region bias parameter for the geocoder (lower-cased country code).
    #[must_use]
    pub fn region_bias(&self) -> String {
        self.country_code.to_lowercase()
    }
}
