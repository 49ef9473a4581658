use thiserror::Error;

use crate::resource::Resource;

/// Errors returned by the catalog ingestion client.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// An auth-requiring resource was called without a bearer token.
    #[error("{0} ingestion requires TOKEN to be set")]
    MissingToken(Resource),
}
