use fctbiz_core::RegionConfig;

use crate::error::SearchError;
use crate::request::SearchRequest;

pub(crate) const MISSING_KEYWORD: &str = "Location/Area is required";
pub(crate) const MISSING_CATEGORY: &str = "Business category is required";
pub(crate) const MISSING_QUERY: &str = "Search query is required";

/// Checks a first-page request. The wildcard counts as "no category chosen".
pub(crate) fn validate_first_page(
    request: &SearchRequest,
    region: &RegionConfig,
) -> Result<(), SearchError> {
    let mut errors = Vec::new();
    if request.keyword.trim().is_empty() {
        errors.push(MISSING_KEYWORD.to_owned());
    }
    let category = request.category.trim();
    if category.is_empty() || region.is_wildcard(category) {
        errors.push(MISSING_CATEGORY.to_owned());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SearchError::Validation(errors))
    }
}
