//! Minimal Rust client for the Pinata cloud pinning REST API.
//!
//! This crate attaches Pinata's API key headers to outgoing requests and
//! exposes the authentication check and pin-by-hash endpoints. Responses are
//! handed back untouched: status codes and bodies are for the caller to
//! interpret.
//!
//! # Features
//!
//! - Static `pinata_api_key` / `pinata_secret_api_key` header authentication
//! - Typed pin metadata restricted to strings, numbers, and dates
//! - Dates normalized to UTC RFC 3339 when stored
//! - Overridable base URL for testing against mock servers
//!
//! # Example
//!
//! ```ignore
//! use pinata_client::{Metadata, PinataClient, PinataError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), PinataError> {
//!     let client = PinataClient::new("api-key", "api-secret");
//!
//!     // Check the credentials
//!     let response = client.test_authentication().await?;
//!     println!("auth: {}", response.status());
//!
//!     // Pin a hash with metadata
//!     let mut meta = Metadata::with_name("such_wow");
//!     meta.set_key_value("time_thing", chrono::Utc::now());
//!     meta.set_key_value("int_thing", 123);
//!
//!     let response = client
//!         .pin_hash_to_ipfs_with_metadata("QmZULkCELmmk5XNfCgTnCyFgAVxBRBXyDHGGMVoLFLiXEN", &meta)
//!         .await?;
//!     println!("{}", response.text().await.map_err(PinataError::Transport)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `test_authentication` | GET | `/data/testAuthentication` |
//! | `pin_hash_to_ipfs` | POST | `/pinning/pinHashToIPFS` |

mod client;
mod endpoints;
mod error;
mod metadata;

pub use client::{
    PinataClient, API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SECRET_API_KEY_HEADER,
};
pub use endpoints::pinning::PinRequest;
pub use error::PinataError;
pub use metadata::{format_timestamp, Metadata, MetadataValue};
