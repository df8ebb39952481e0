use thiserror::Error;

/// Errors returned by the Google Places client.
///
/// Only transport-level failures live here. A response that parsed but
/// carries a non-`OK` status is returned as data so that callers can decide
/// how each status is classified.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, timeout, or non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
