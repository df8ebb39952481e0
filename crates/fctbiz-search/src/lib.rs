//! Search orchestration: turns a location phrase plus a category into a
//! provider query, runs it, and classifies the provider's answer.

pub mod error;
pub mod orchestrator;
pub mod outcome;
pub mod request;
pub mod resolver;
mod validation;

#[cfg(test)]
mod fake;

pub use error::SearchError;
pub use orchestrator::{SearchOrchestrator, DETAIL_FIELDS};
pub use outcome::SearchOutcome;
pub use request::{ResolvedQuery, SearchRequest, TextSearchRequest};
pub use resolver::{classify, GeocodeResult, KeywordKind, QueryResolver};
