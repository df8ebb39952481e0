//! Decides whether a keyword names a place or a kind of business, and turns a
//! first-page request into a provider query.

use std::sync::Arc;

use fctbiz_core::{LatLng, RegionConfig};
use fctbiz_places::{GeocodeQuery, PlacesProvider, ProviderStatus};

use crate::error::SearchError;
use crate::request::{ResolvedQuery, SearchRequest};
use crate::validation::MISSING_KEYWORD;

/// Words that mark a keyword as already naming a kind of business.
///
/// Matched as lower-case substrings, so `"barber"` hits `"bar"` and
/// `"Cafe Street"` is treated as a business term even if it names a street.
const BUSINESS_TERMS: &[&str] = &[
    "restaurant",
    "hospital",
    "bank",
    "school",
    "hotel",
    "pharmacy",
    "supermarket",
    "shop",
    "store",
    "clinic",
    "church",
    "mosque",
    "gas station",
    "petrol station",
    "filling station",
    "atm",
    "mall",
    "market",
    "office",
    "gym",
    "spa",
    "bar",
    "club",
    "cafe",
    "bakery",
    "electronics",
    "clothing",
    "fashion",
    "beauty",
    "salon",
    "mechanic",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// A landmark or area that must be geocoded.
    PlaceName,
    /// A business term sent to the provider as a search keyword.
    GenericTerm,
}

#[must_use]
pub fn classify(keyword: &str) -> KeywordKind {
    let term = keyword.to_lowercase();
    if BUSINESS_TERMS.iter().any(|t| term.contains(t)) {
        KeywordKind::GenericTerm
    } else {
        KeywordKind::PlaceName
    }
}

/// A geocode hit that lies inside the target region.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub location: LatLng,
    pub formatted_address: String,
}

/// Maps a raw category to the provider filter. Blank and wildcard mean "all".
pub(crate) fn category_filter(region: &RegionConfig, category: &str) -> Option<String> {
    let category = category.trim();
    (!category.is_empty() && !region.is_wildcard(category)).then(|| category.to_owned())
}

pub struct QueryResolver {
    provider: Arc<dyn PlacesProvider>,
    region: Arc<RegionConfig>,
}

impl QueryResolver {
    #[must_use]
    pub fn new(provider: Arc<dyn PlacesProvider>, region: Arc<RegionConfig>) -> Self {
        Self { provider, region }
    }

    /// Builds the provider query for a first-page request.
    ///
    /// Place names cost exactly one geocoding call; business terms cost none.
    /// Continuations must not come through here: `request.page_token` is
    /// ignored and the resolved query never carries one.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Validation`] if the keyword is blank; no call is made.
    /// - [`SearchError::LocationNotFound`] if a place name does not geocode
    ///   to a location inside the region.
    /// - [`SearchError::Provider`] if the geocoding call itself fails.
    pub async fn resolve(&self, request: &SearchRequest) -> Result<ResolvedQuery, SearchError> {
        if request.keyword.trim().is_empty() {
            return Err(SearchError::Validation(vec![MISSING_KEYWORD.to_owned()]));
        }
        let category = category_filter(&self.region, &request.category);

        let (effective_keyword, effective_location) = match classify(&request.keyword) {
            KeywordKind::GenericTerm => (
                request.keyword.clone(),
                request.location.unwrap_or(self.region.center),
            ),
            KeywordKind::PlaceName => {
                let place_name = request.keyword.trim();
                let hit =
                    self.geocode(place_name)
                        .await?
                        .ok_or_else(|| SearchError::LocationNotFound {
                            keyword: request.keyword.clone(),
                            region: self.region.name.clone(),
                        })?;
                tracing::debug!(
                    place_name,
                    formatted_address = %hit.formatted_address,
                    lat = hit.location.lat,
                    lng = hit.location.lng,
                    "resolved place name"
                );
                (String::new(), hit.location)
            }
        };

        Ok(ResolvedQuery {
            effective_keyword,
            effective_location,
            radius_meters: self.region.radius_meters,
            category,
            page_token: None,
        })
    }

    /// Geocodes `place_name` inside the region.
    ///
    /// Returns `Ok(None)` when the provider has no result or its top result
    /// lies outside the region.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Provider`] on transport failure.
    pub async fn geocode(&self, place_name: &str) -> Result<Option<GeocodeResult>, SearchError> {
        let query = GeocodeQuery {
            address: self.region.geocode_address(place_name),
            region: self.region.region_bias(),
            country: self.region.country_code.clone(),
        };
        let response = self.provider.geocode(&query).await?;

        if response.status != ProviderStatus::Ok {
            tracing::debug!(place_name, status = %response.status, "geocode returned no result");
            return Ok(None);
        }
        let Some(top) = response.results.into_iter().next() else {
            return Ok(None);
        };

        let in_region = top.address_components.iter().any(|c| {
            c.is_first_level_admin_area()
                && self.region.matches_admin_area(&c.long_name, &c.short_name)
        });
        if !in_region {
            tracing::warn!(
                place_name,
                formatted_address = %top.formatted_address,
                region = %self.region.name,
                "geocoded location is outside the target region"
            );
            return Ok(None);
        }

        Ok(Some(GeocodeResult {
            location: top.geometry.location,
            formatted_address: top.formatted_address,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{geocode_hit, Call, FakeProvider};

    fn resolver(provider: &Arc<FakeProvider>) -> QueryResolver {
        QueryResolver::new(
            Arc::clone(provider) as Arc<dyn PlacesProvider>,
            Arc::new(RegionConfig::default()),
        )
    }

    #[test]
    fn classify_business_terms_as_generic() {
        assert_eq!(classify("restaurant near Wuse"), KeywordKind::GenericTerm);
        assert_eq!(classify("Total Filling Station"), KeywordKind::GenericTerm);
        assert_eq!(classify("BEAUTY parlour"), KeywordKind::GenericTerm);
    }

    #[test]
    fn classify_places_as_place_names() {
        assert_eq!(classify("Gwarinpa"), KeywordKind::PlaceName);
        assert_eq!(classify("Jabi Lake"), KeywordKind::PlaceName);
        assert_eq!(classify("Maitama"), KeywordKind::PlaceName);
    }

    #[test]
    fn classify_is_substring_based() {
        // Known false positive: a street named after a business term.
        assert_eq!(classify("Cafe Street"), KeywordKind::GenericTerm);
        assert_eq!(classify("Barnawa"), KeywordKind::GenericTerm);
    }

    #[test]
    fn category_filter_drops_blank_and_wildcard() {
        let region = RegionConfig::default();
        assert_eq!(category_filter(&region, ""), None);
        assert_eq!(category_filter(&region, "  "), None);
        assert_eq!(category_filter(&region, "all"), None);
        assert_eq!(category_filter(&region, "bank"), Some("bank".to_owned()));
    }

    #[tokio::test]
    async fn generic_term_keeps_keyword_and_skips_geocoder() {
        let provider = Arc::new(FakeProvider::new());
        let resolved = resolver(&provider)
            .resolve(&SearchRequest::first_page("restaurant near Wuse", "restaurant"))
            .await
            .expect("resolve");

        assert_eq!(resolved.effective_keyword, "restaurant near Wuse");
        assert_eq!(resolved.effective_location, RegionConfig::default().center);
        assert_eq!(resolved.radius_meters, 5000);
        assert_eq!(resolved.category.as_deref(), Some("restaurant"));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn generic_term_uses_explicit_location() {
        let provider = Arc::new(FakeProvider::new());
        let request = SearchRequest {
            location: Some(LatLng::new(9.05, 7.49)),
            ..SearchRequest::first_page("pharmacy", "pharmacy")
        };
        let resolved = resolver(&provider).resolve(&request).await.expect("resolve");
        assert_eq!(resolved.effective_location, LatLng::new(9.05, 7.49));
    }

    #[tokio::test]
    async fn place_name_is_geocoded_and_consumed() {
        let provider = Arc::new(
            FakeProvider::new().with_geocode(geocode_hit(
                9.1099,
                7.4042,
                "Federal Capital Territory",
                "FC",
            )),
        );
        let resolved = resolver(&provider)
            .resolve(&SearchRequest::first_page("Gwarinpa", "all"))
            .await
            .expect("resolve");

        assert_eq!(resolved.effective_keyword, "");
        assert_eq!(resolved.effective_location, LatLng::new(9.1099, 7.4042));
        assert_eq!(resolved.category, None);
        assert_eq!(
            provider.calls(),
            vec![Call::Geocode(GeocodeQuery {
                address: "Gwarinpa, FCT, Abuja, Nigeria".to_owned(),
                region: "ng".to_owned(),
                country: "NG".to_owned(),
            })]
        );
    }

    #[tokio::test]
    async fn place_outside_region_is_not_found() {
        let provider =
            Arc::new(FakeProvider::new().with_geocode(geocode_hit(6.45, 3.39, "Lagos", "LA")));
        let err = resolver(&provider)
            .resolve(&SearchRequest::first_page("Ikeja", "bank"))
            .await
            .expect_err("out-of-region hit must fail");

        assert!(matches!(err, SearchError::LocationNotFound { ref keyword, .. } if keyword == "Ikeja"));
        assert_eq!(err.to_string(), "Location \"Ikeja\" not found in FCT, Abuja.");
    }

    #[tokio::test]
    async fn place_with_no_geocode_result_is_not_found() {
        let provider = Arc::new(FakeProvider::new());
        let err = resolver(&provider)
            .resolve(&SearchRequest::first_page("Nowhereville", "bank"))
            .await
            .expect_err("no result must fail");
        assert!(matches!(err, SearchError::LocationNotFound { .. }));
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn geocode_transport_failure_propagates() {
        let provider = Arc::new(FakeProvider::new().failing_geocode());
        let err = resolver(&provider)
            .resolve(&SearchRequest::first_page("Gwarinpa", "bank"))
            .await
            .expect_err("transport failure must fail");
        assert!(matches!(err, SearchError::Provider(_)));
    }

    #[tokio::test]
    async fn geocode_accepts_short_name_match() {
        let provider =
            Arc::new(FakeProvider::new().with_geocode(geocode_hit(9.0, 7.5, "Abuja", "FCT")));
        let hit = resolver(&provider)
            .geocode("Garki")
            .await
            .expect("geocode")
            .expect("in region");
        assert_eq!(hit.location, LatLng::new(9.0, 7.5));
        assert_eq!(hit.formatted_address, "Somewhere, Abuja, Nigeria");
    }

    #[tokio::test]
    async fn blank_keyword_is_rejected_without_geocoding() {
        let provider = Arc::new(FakeProvider::new());
        let err = resolver(&provider)
            .resolve(&SearchRequest::first_page("   ", "bank"))
            .await
            .expect_err("blank keyword must fail");

        assert!(matches!(err, SearchError::Validation(ref v) if *v == vec![MISSING_KEYWORD.to_owned()]));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn only_first_level_admin_area_counts_toward_region() {
        let provider = Arc::new(FakeProvider::new().with_geocode(serde_json::json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Karu, Nasarawa, Nigeria",
                "geometry": { "location": { "lat": 9.0, "lng": 7.6 } },
                "address_components": [
                    { "long_name": "FCT", "short_name": "FCT", "types": ["administrative_area_level_2", "political"] },
                    { "long_name": "Nasarawa", "short_name": "NA", "types": ["administrative_area_level_1", "political"] },
                    { "long_name": "Nigeria", "short_name": "NG", "types": ["country", "political"] }
                ]
            }]
        })));

        let hit = resolver(&provider).geocode("Karu").await.expect("geocode");
        assert!(hit.is_none());
    }
}
