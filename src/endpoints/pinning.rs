//! Pinning endpoints.

use reqwest::{Method, Response};
use serde::Serialize;
use tracing::debug;

use crate::client::PinataClient;
use crate::error::PinataError;
use crate::metadata::Metadata;

/// Pin-by-hash endpoint path.
const PIN_HASH_TO_IPFS_PATH: &str = "/pinning/pinHashToIPFS";

/// Body of a pin-by-hash request.
///
/// `pinataMetadata` is only present on the wire when metadata with a name or
/// at least one key/value pair was attached.
#[derive(Debug, Clone, Serialize)]
pub struct PinRequest<'a> {
    #[serde(rename = "hashToPin")]
    hash_to_pin: &'a str,
    #[serde(rename = "pinataMetadata", skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
}

impl<'a> PinRequest<'a> {
    /// Create a request for `hash`. The hash is passed through verbatim.
    pub fn new(hash: &'a str) -> Self {
        Self {
            hash_to_pin: hash,
            metadata: None,
        }
    }

    /// Attach metadata, unless it is empty.
    pub fn with_metadata(mut self, metadata: &'a Metadata) -> Self {
        self.metadata = (!metadata.is_empty()).then_some(metadata);
        self
    }

    /// The hash to pin.
    pub fn hash_to_pin(&self) -> &str {
        self.hash_to_pin
    }

    /// The attached metadata, if any.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata
    }

    /// Encode the request as JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, PinataError> {
        serde_json::to_vec(self).map_err(PinataError::from)
    }
}

/// Issue an authenticated POST pinning `hash` with optional metadata.
pub async fn pin_hash_to_ipfs(
    client: &PinataClient,
    hash: &str,
    metadata: &Metadata,
) -> Result<Response, PinataError> {
    let body = PinRequest::new(hash).with_metadata(metadata).to_json()?;
    debug!(hash, with_metadata = !metadata.is_empty(), "pinning hash");

    let url = client.url(PIN_HASH_TO_IPFS_PATH);
    let request = client.new_request_with_headers(Method::POST, &url, Some(body))?;
    client.execute(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HASH: &str = "QmZULkCELmmk5XNfCgTnCyFgAVxBRBXyDHGGMVoLFLiXEN";

    fn encode(request: &PinRequest<'_>) -> serde_json::Value {
        serde_json::from_slice(&request.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(PIN_HASH_TO_IPFS_PATH, "/pinning/pinHashToIPFS");
    }

    #[test]
    fn test_request_without_metadata() {
        let request = PinRequest::new(HASH);
        assert!(request.metadata().is_none());
        assert_eq!(encode(&request), json!({"hashToPin": HASH}));
    }

    #[test]
    fn test_empty_metadata_is_omitted() {
        let meta = Metadata::new();
        let request = PinRequest::new(HASH).with_metadata(&meta);
        assert!(request.metadata().is_none());
        assert_eq!(encode(&request), json!({"hashToPin": HASH}));
    }

    #[test]
    fn test_metadata_is_attached() {
        let mut meta = Metadata::with_name("such_wow");
        meta.set_key_value("string_thing", "much_awesome");
        let request = PinRequest::new(HASH).with_metadata(&meta);

        assert_eq!(
            encode(&request),
            json!({
                "hashToPin": HASH,
                "pinataMetadata": {
                    "name": "such_wow",
                    "keyvalues": {"string_thing": "much_awesome"}
                }
            })
        );
    }

    #[test]
    fn test_name_only_metadata_is_attached() {
        let meta = Metadata::with_name("bob");
        let request = PinRequest::new(HASH).with_metadata(&meta);
        assert_eq!(
            encode(&request),
            json!({"hashToPin": HASH, "pinataMetadata": {"name": "bob"}})
        );
    }

    #[test]
    fn test_non_finite_metadata_is_a_serialization_error() {
        let mut meta = Metadata::with_name("n");
        meta.set_key_value("nan", f64::NAN);
        meta.set_key_value("inf", f32::INFINITY);

        let result = PinRequest::new("h").with_metadata(&meta).to_json();
        assert!(matches!(result, Err(PinataError::Serialization(_))));
    }

    #[test]
    fn test_hash_is_passed_verbatim() {
        let request = PinRequest::new("not a real hash ");
        assert_eq!(request.hash_to_pin(), "not a real hash ");
        assert_eq!(encode(&request), json!({"hashToPin": "not a real hash "}));
    }
}
