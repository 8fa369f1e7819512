//! Client construction and shared request plumbing.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

const USER_AGENT: &str = "engage/0.1 (lead-management)";
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the engage REST backend.
///
/// Holds the HTTP client, normalized base URL, and bearer token. The token is
/// injected into every request; there is no refresh flow, so a 401 surfaces
/// as [`ApiError::Status`]. Cloning is cheap (the inner `reqwest::Client` is
/// reference-counted), which lets each resource store own its own handle.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl ApiClient {
    /// Creates a client bound to `base_url` with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, token: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends path
        // segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            token: token.to_owned(),
        })
    }

    /// Resolves `path` (e.g. `"api/lead/bulk-update"`) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidBaseUrl {
            url: format!("{}{path}", self.base_url),
            reason: e.to_string(),
        })
    }

    /// Starts a request with the bearer token attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "issuing request");
        Ok(self.client.request(method, url).bearer_auth(&self.token))
    }

    /// Sends a prepared request and asserts a successful status.
    ///
    /// 304 Not Modified passes through: the leads list treats it as an empty
    /// page rather than a failure.
    pub(crate) async fn send(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            Ok(response)
        } else {
            tracing::warn!(path, status = status.as_u16(), "request failed");
            Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_owned(),
            })
        }
    }

    /// Reads the body and deserializes it, tagging failures with `context`.
    pub(crate) async fn json_body<T: DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, "test-token", 30).expect("client construction should not fail")
    }

    #[test]
    fn endpoint_joins_path_onto_base() {
        let client = test_client("https://api.example.com");
        let url = client.endpoint("api/lead").expect("join");
        assert_eq!(url.as_str(), "https://api.example.com/api/lead");
    }

    #[test]
    fn endpoint_tolerates_trailing_slashes_on_base() {
        let client = test_client("https://api.example.com///");
        let url = client.endpoint("api/lead/bulk-update").expect("join");
        assert_eq!(url.as_str(), "https://api.example.com/api/lead/bulk-update");
    }

    #[test]
    fn endpoint_preserves_base_path_prefix() {
        let client = test_client("https://example.com/backend");
        let url = client.endpoint("api/settings").expect("join");
        assert_eq!(url.as_str(), "https://example.com/backend/api/settings");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ApiClient::new("not a url", "t", 30);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }
}
