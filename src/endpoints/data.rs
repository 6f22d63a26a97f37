//! Data endpoints.

use reqwest::{Method, Response};

use crate::client::PinataClient;
use crate::error::PinataError;

/// Authentication check endpoint path.
const TEST_AUTHENTICATION_PATH: &str = "/data/testAuthentication";

/// Issue an authenticated GET against the authentication check endpoint.
pub async fn test_authentication(client: &PinataClient) -> Result<Response, PinataError> {
    let url = client.url(TEST_AUTHENTICATION_PATH);
    let request = client.new_request_with_headers(Method::GET, &url, None)?;
    client.execute(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(TEST_AUTHENTICATION_PATH, "/data/testAuthentication");
    }

    #[test]
    fn test_url_construction() {
        let mut client = PinataClient::new("", "");
        client.set_base_url("http://localhost:8080");
        assert_eq!(
            client.url(TEST_AUTHENTICATION_PATH),
            "http://localhost:8080/data/testAuthentication"
        );
    }
}
