//! Search client for the remote paper-search service
//!
//! Thin request/response wrapper: no retries, no caching. Failures surface
//! as user-visible error states in the UI.

pub mod client;
pub mod types;

pub use client::{SearchClient, SearchError};
pub use types::{HealthStatus, PaperMetadata, PaperResult, SearchRequest, SearchResponse};
