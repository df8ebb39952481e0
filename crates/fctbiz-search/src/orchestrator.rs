//! The three provider-facing operations: nearby search, free-text search, and
//! details lookup.
//!
//! Each operation makes at most one geocoding call followed by at most one
//! places call, in that order. Nothing is cached or shared between calls
//! beyond the immutable region configuration and the provider handle, so
//! concurrent invocations are independent.
//!
//! A caller drives pagination: `Idle -> Searching -> Results | Empty | Error`,
//! and from `Results` with [`SearchOutcome::has_more`] it may issue
//! [`SearchRequest::next_page`] until a terminal state is reached.

use std::sync::Arc;

use fctbiz_core::RegionConfig;
use fctbiz_places::{BusinessDetails, NearbyQuery, PlacesProvider, ProviderStatus, TextQuery};

use crate::error::SearchError;
use crate::outcome::SearchOutcome;
use crate::request::{SearchRequest, TextSearchRequest};
use crate::resolver::{category_filter, QueryResolver};
use crate::validation::{validate_first_page, MISSING_QUERY};

/// Field mask requested from the details endpoint.
pub const DETAIL_FIELDS: [&str; 10] = [
    "name",
    "formatted_address",
    "formatted_phone_number",
    "international_phone_number",
    "geometry",
    "opening_hours",
    "rating",
    "user_ratings_total",
    "website",
    "types",
];

pub struct SearchOrchestrator {
    provider: Arc<dyn PlacesProvider>,
    resolver: QueryResolver,
    region: Arc<RegionConfig>,
}

impl SearchOrchestrator {
    /// Builds an orchestrator whose resolver shares `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn PlacesProvider>, region: RegionConfig) -> Self {
        let region = Arc::new(region);
        let resolver = QueryResolver::new(Arc::clone(&provider), Arc::clone(&region));
        Self::with_resolver(provider, resolver, region)
    }

    #[must_use]
    pub fn with_resolver(
        provider: Arc<dyn PlacesProvider>,
        resolver: QueryResolver,
        region: Arc<RegionConfig>,
    ) -> Self {
        Self {
            provider,
            resolver,
            region,
        }
    }

    #[must_use]
    pub fn region(&self) -> &RegionConfig {
        &self.region
    }

    /// Searches by location phrase and category.
    ///
    /// A first-page request with `should_execute` unset returns
    /// [`SearchOutcome::Empty`] without any outbound call. A continuation
    /// request skips validation and resolution; the token already encodes
    /// the original query.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Validation`] listing every missing field.
    /// - [`SearchError::LocationNotFound`] if the keyword names a place
    ///   outside the region.
    /// - [`SearchError::Provider`] on transport failure.
    pub async fn search_nearby(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchOutcome, SearchError> {
        let page_token = request.continuation_token();
        if !request.should_execute && page_token.is_none() {
            return Ok(SearchOutcome::Empty);
        }

        let query = if let Some(token) = page_token {
            NearbyQuery {
                location: request.location.unwrap_or(self.region.center),
                radius_meters: self.region.radius_meters,
                // No `establishment` fallback: the provider ignores `type`
                // once a page token is present.
                category: category_filter(&self.region, &request.category),
                keyword: Some(request.keyword.clone()).filter(|k| !k.is_empty()),
                page_token: Some(token.to_owned()),
            }
        } else {
            validate_first_page(request, &self.region)?;
            self.resolver.resolve(request).await?.into_nearby_query()
        };

        tracing::info!(
            keyword = query.keyword.as_deref().unwrap_or(""),
            category = query.category.as_deref().unwrap_or("all"),
            location = %query.location.to_query_value(),
            continuation = query.page_token.is_some(),
            "nearby search"
        );
        let page = self.provider.nearby_search(&query).await?;
        Ok(SearchOutcome::from_page(page))
    }

    /// Free-text search scoped to the region by appending its qualifier.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Validation`] if the query is blank.
    /// - [`SearchError::Provider`] on transport failure.
    pub async fn search_by_text(
        &self,
        request: &TextSearchRequest,
    ) -> Result<SearchOutcome, SearchError> {
        let text = request.query.trim();
        if text.is_empty() {
            return Err(SearchError::Validation(vec![MISSING_QUERY.to_owned()]));
        }

        let query = TextQuery {
            query: self.region.text_query(text),
            location: request.location.unwrap_or(self.region.center),
            radius_meters: request
                .radius_meters
                .filter(|r| *r > 0)
                .unwrap_or(self.region.radius_meters),
            page_token: request.page_token.clone().filter(|t| !t.is_empty()),
        };

        tracing::info!(
            query = %query.query,
            continuation = query.page_token.is_some(),
            "text search"
        );
        let page = self.provider.text_search(&query).await?;
        Ok(SearchOutcome::from_page(page))
    }

    /// Looks up one business by provider place id.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NotFound`] if `place_id` is blank; no call is made.
    /// - [`SearchError::PlaceNotFound`] if the provider answers `OK` without
    ///   a record.
    /// - [`SearchError::UpstreamStatus`] for any status other than `OK`.
    /// - [`SearchError::Provider`] on transport failure.
    pub async fn get_details(&self, place_id: &str) -> Result<BusinessDetails, SearchError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(SearchError::NotFound);
        }

        tracing::info!(place_id, "place details");
        let response = self.provider.place_details(place_id, &DETAIL_FIELDS).await?;
        match response.status {
            ProviderStatus::Ok => response.result.ok_or_else(|| SearchError::PlaceNotFound {
                place_id: place_id.to_owned(),
            }),
            status => {
                tracing::warn!(
                    place_id,
                    %status,
                    error_message = response.error_message.as_deref().unwrap_or(""),
                    "details lookup failed"
                );
                Err(SearchError::UpstreamStatus(status))
            }
        }
    }
}
