//! HTTP client for the polish catalog REST API.
//!
//! Wraps `reqwest` with endpoint routing, bearer-token handling, and a typed
//! per-record outcome so callers can tell an accepted record from a rejected
//! one without re-parsing responses.

pub mod client;
pub mod error;
pub mod resource;

pub use client::{CatalogClient, IngestOutcome};
pub use error::IngestError;
pub use resource::Resource;
