//! Authenticated HTTP client for the Pinata API.

use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Request, Response};
use tracing::debug;

use crate::endpoints::{data, pinning};
use crate::error::PinataError;
use crate::metadata::Metadata;

/// Default timeout for every API request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default Pinata API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.pinata.cloud";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "pinata_api_key";

/// Header carrying the API secret.
pub const SECRET_API_KEY_HEADER: &str = "pinata_secret_api_key";

/// Client for the Pinata REST API.
///
/// Holds the API key and secret and attaches them to every request. Each
/// call performs exactly one request; nothing is retried.
///
/// # Example
///
/// ```ignore
/// use pinata_client::{Metadata, PinataClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), pinata_client::PinataError> {
///     let client = PinataClient::new("key", "secret");
///
///     let mut meta = Metadata::with_name("such_wow");
///     meta.set_key_value("string_thing", "much_awesome");
///
///     let response = client
///         .pin_hash_to_ipfs_with_metadata("QmZULkCELmmk5XNfCgTnCyFgAVxBRBXyDHGGMVoLFLiXEN", &meta)
///         .await?;
///     println!("{}", response.status());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PinataClient {
    inner: Client,
    key: String,
    secret: String,
    base_url: String,
    timeout: Duration,
}

impl PinataClient {
    /// Create a client with the default base URL and timeout.
    ///
    /// Credentials are not validated and no network I/O happens here.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::with_timeout(key, secret, DEFAULT_TIMEOUT)
    }

    /// Create a client with the default base URL and a custom timeout.
    pub fn with_timeout(
        key: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            inner: Client::new(),
            key: key.into(),
            secret: secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at another endpoint (for testing).
    ///
    /// Must not be called while requests are in flight.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request carrying the Pinata credential headers.
    ///
    /// When `body` is present it is sent as `application/json`.
    ///
    /// # Errors
    ///
    /// Returns `PinataError::Construction` if the URL or a header value is
    /// malformed.
    pub fn new_request_with_headers(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request, PinataError> {
        let mut builder = self
            .inner
            .request(method, url)
            .timeout(self.timeout)
            .header(API_KEY_HEADER, &self.key)
            .header(SECRET_API_KEY_HEADER, &self.secret);

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        builder.build().map_err(PinataError::Construction)
    }

    pub(crate) async fn execute(&self, request: Request) -> Result<Response, PinataError> {
        debug!(
            method = %request.method(),
            url = %request.url(),
            body_len = request.body().and_then(|b| b.as_bytes()).map(<[u8]>::len),
            "sending pinata request"
        );

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(PinataError::Transport)?;

        debug!(status = %response.status(), "received pinata response");
        Ok(response)
    }

    /// Check that the configured credentials are accepted.
    ///
    /// The response is returned as-is; a rejected key shows up as a non-2xx
    /// status, not as an error.
    pub async fn test_authentication(&self) -> Result<Response, PinataError> {
        data::test_authentication(self).await
    }

    /// Pin a content hash without metadata.
    pub async fn pin_hash_to_ipfs(&self, hash: &str) -> Result<Response, PinataError> {
        pinning::pin_hash_to_ipfs(self, hash, &Metadata::new()).await
    }

    /// Pin a content hash, attaching `metadata` unless it is empty.
    ///
    /// # Errors
    ///
    /// Returns `PinataError::Serialization` if the body cannot be encoded, in
    /// which case no request is sent.
    pub async fn pin_hash_to_ipfs_with_metadata(
        &self,
        hash: &str,
        metadata: &Metadata,
    ) -> Result<Response, PinataError> {
        pinning::pin_hash_to_ipfs(self, hash, metadata).await
    }
}

impl fmt::Debug for PinataClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinataClient")
            .field("key", &"<redacted>")
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
