//! The `CatalogClient`: one synchronous-in-spirit POST per record.
//!
//! Each call is a stateless, independent request/response exchange; there is
//! no session, retry, or ordering dependency between calls. Non-success
//! statuses are returned as data (not errors) so callers can keep iterating.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use polishdb_core::PolishPayload;

use crate::error::IngestError;
use crate::resource::Resource;

const USER_AGENT: &str = "polishdb/0.1 (catalog-import)";

/// Client for the polish catalog REST API.
///
/// Holds the HTTP client, normalized base URL, and optional bearer token.
/// Point `base_url` at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

/// Outcome of submitting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The remote service accepted the record.
    Created,
    /// The remote service answered with a non-success status. The API
    /// reports duplicate records this way, but the same shape also covers
    /// auth and validation failures, so the raw status and body are kept
    /// for the caller to log.
    Rejected { status: StatusCode, body: String },
}

impl CatalogClient {
    /// Creates a client for the catalog API at `base_url`.
    ///
    /// `auth_token` may be `None` when only the formulas endpoint will be
    /// used; auth-requiring calls then fail with
    /// [`IngestError::MissingToken`].
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`IngestError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(
        base_url: &str,
        auth_token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends the
        // resource suffix instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| IngestError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            auth_token: auth_token.map(str::to_owned),
        })
    }

    /// Submits one brand name to `/brands/new`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] on network failure and
    /// [`IngestError::MissingToken`] if no token was configured.
    pub async fn create_brand(&self, name: &str) -> Result<IngestOutcome, IngestError> {
        self.post_form(Resource::Brand, &[("name", name)]).await
    }

    /// Submits one color name to `/colors/new`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] on network failure and
    /// [`IngestError::MissingToken`] if no token was configured.
    pub async fn create_color(&self, name: &str) -> Result<IngestOutcome, IngestError> {
        self.post_form(Resource::Color, &[("name", name)]).await
    }

    /// Submits one formula name to `/formulas/new`. No Authorization header
    /// is sent (see [`Resource::requires_auth`]).
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] on network failure.
    pub async fn create_formula(&self, name: &str) -> Result<IngestOutcome, IngestError> {
        self.post_form(Resource::Formula, &[("formula", name)]).await
    }

    /// Submits one composite polish record to `/polish/new`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] on network failure and
    /// [`IngestError::MissingToken`] if no token was configured.
    pub async fn create_polish(
        &self,
        payload: &PolishPayload,
    ) -> Result<IngestOutcome, IngestError> {
        let pairs = payload.to_form_pairs();
        self.post_form(Resource::Polish, &pairs).await
    }

    /// Joins the resource suffix onto the normalized base URL.
    fn endpoint(&self, resource: Resource) -> Result<Url, IngestError> {
        self.base_url
            .join(resource.path_suffix())
            .map_err(|e| IngestError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends one form-encoded POST and maps the status to an outcome.
    ///
    /// The response body is read only on non-success, for diagnostics; a
    /// body read failure degrades to an empty string rather than masking
    /// the status.
    async fn post_form(
        &self,
        resource: Resource,
        pairs: &[(&str, &str)],
    ) -> Result<IngestOutcome, IngestError> {
        let url = self.endpoint(resource)?;

        let mut request = self.client.post(url.clone()).form(&pairs);
        if resource.requires_auth() {
            let token = self
                .auth_token
                .as_deref()
                .ok_or(IngestError::MissingToken(resource))?;
            request = request.bearer_auth(token);
        }

        tracing::debug!(%resource, %url, "submitting record");
        let response = request.send().await?;
        let status = response.status();

        if status == resource.success_status() {
            return Ok(IngestOutcome::Created);
        }

        let body = response.text().await.unwrap_or_default();
        Ok(IngestOutcome::Rejected { status, body })
    }
}
