use fctbiz_core::LatLng;
use fctbiz_places::NearbyQuery;

/// A location-and-category search, first page or continuation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    /// Free-text location phrase or business term, e.g. `"Gwarinpa"` or
    /// `"restaurant near Wuse"`.
    pub keyword: String,
    pub category: String,
    /// Provider continuation token. An empty string counts as absent.
    pub page_token: Option<String>,
    /// Explicit search center; the region center is used when absent.
    pub location: Option<LatLng>,
    /// Trigger gate. A first-page request with this unset never reaches the
    /// provider.
    pub should_execute: bool,
}

impl SearchRequest {
    #[must_use]
    pub fn first_page(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
            page_token: None,
            location: None,
            should_execute: true,
        }
    }

    /// Continuation of this search using a token from the previous page.
    #[must_use]
    pub fn next_page(&self, page_token: impl Into<String>) -> Self {
        Self {
            page_token: Some(page_token.into()),
            ..self.clone()
        }
    }

    /// The continuation token, if one is present and non-empty.
    #[must_use]
    pub fn continuation_token(&self) -> Option<&str> {
        self.page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// A free-text search. No geocoding is involved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSearchRequest {
    pub query: String,
    pub page_token: Option<String>,
    pub location: Option<LatLng>,
    /// Overrides the region's default radius when set.
    pub radius_meters: Option<u32>,
}

impl TextSearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// The provider query produced by the resolver.
///
/// `effective_keyword` is empty exactly when geocoding consumed the keyword
/// into `effective_location`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub effective_keyword: String,
    pub effective_location: LatLng,
    pub radius_meters: u32,
    /// `None` means "all categories".
    pub category: Option<String>,
    pub page_token: Option<String>,
}

impl ResolvedQuery {
    #[must_use]
    pub fn into_nearby_query(self) -> NearbyQuery {
        NearbyQuery {
            location: self.effective_location,
            radius_meters: self.radius_meters,
            category: self.category,
            keyword: Some(self.effective_keyword).filter(|k| !k.is_empty()),
            page_token: self.page_token,
        }
    }
}
