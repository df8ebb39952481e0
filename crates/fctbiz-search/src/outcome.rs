use fctbiz_places::{Business, PlacesPage, ProviderStatus};

/// Result of a nearby or text search.
///
/// `Empty` is a distinct success-like outcome so callers can tell "nothing
/// matched" apart from "the request failed".
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Success {
        results: Vec<Business>,
        next_page_token: Option<String>,
    },
    Empty,
    Error {
        status: ProviderStatus,
    },
}

impl SearchOutcome {
    /// Classifies a provider page by its status.
    ///
    /// Only `OK` and `ZERO_RESULTS` are non-errors; every other status,
    /// including ones this crate has never seen, becomes [`Self::Error`].
    #[must_use]
    pub fn from_page(page: PlacesPage) -> Self {
        match page.status {
            ProviderStatus::Ok => Self::Success {
                results: page.results,
                next_page_token: page.next_page_token.filter(|t| !t.is_empty()),
            },
            ProviderStatus::ZeroResults => Self::Empty,
            status => {
                tracing::warn!(
                    %status,
                    error_message = page.error_message.as_deref().unwrap_or(""),
                    "places provider returned an error status"
                );
                Self::Error { status }
            }
        }
    }

    #[must_use]
    pub fn results(&self) -> &[Business] {
        match self {
            Self::Success { results, .. } => results,
            Self::Empty | Self::Error { .. } => &[],
        }
    }

    #[must_use]
    pub fn next_page_token(&self) -> Option<&str> {
        match self {
            Self::Success {
                next_page_token, ..
            } => next_page_token.as_deref(),
            Self::Empty | Self::Error { .. } => None,
        }
    }

    /// `true` when another page can be requested with [`Self::next_page_token`].
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_page_token().is_some()
    }

    #[must_use]
    pub fn total_results(&self) -> usize {
        self.results().len()
    }
}
