//! HTTP client for the back-office API.
//!
//! One shared client carries the base URL, the authorization capability,
//! and the uniform error policy: any failed request is reduced to a
//! human-readable message extracted from the conventional error-detail
//! field, so callers can render it inline and keep their previous data.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use baydesk_core::errors::{Error, Result};

use crate::auth::TokenProvider;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing backend error bodies)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Back-office API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the back-office REST API.
///
/// Typed endpoint methods live in [`crate::endpoints`], grouped per page
/// area; this type only carries the request plumbing.
///
/// # Example
///
/// ```ignore
/// let token = Arc::new(StaticToken::new("jwt-token"));
/// let client = BackofficeApiClient::new("https://backoffice.example.com", token)?;
/// let summary = client.get_financials_summary().await?;
/// ```
#[derive(Clone)]
pub struct BackofficeApiClient {
    client: reqwest::Client,
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
}

impl BackofficeApiClient {
    /// Create a new client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str, token_provider: Arc<dyn TokenProvider>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_provider,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers for API requests.
    ///
    /// The token is read from the provider on every call so a re-login is
    /// picked up without rebuilding the client.
    fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.access_token()?;
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| Error::Auth(format!("Invalid access token format: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a URL with urlencoded query parameters appended.
    pub(crate) fn url_with_query(&self, path: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return self.url(path);
        }
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}{}?{}", self.base_url, path, query)
    }

    /// Make a GET request and parse the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_url(&self.url(path)).await
    }

    /// Make a GET request with query parameters and parse the response.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        self.get_url(&self.url_with_query(path, params)).await
    }

    async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("[BackofficeApi] GET {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Make a GET request and return the raw body (CSV export).
    pub(crate) async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        debug!("[BackofficeApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }
        Ok(body)
    }

    /// Make a POST request with a JSON body and parse the response.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("[BackofficeApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Make a POST request without a body and parse the response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[BackofficeApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Make a POST request without a body, ignoring any response body.
    /// For actions whose endpoints answer 204 or an empty object.
    pub(crate) async fn post_ignore_body(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("[BackofficeApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body));
        }
        Ok(())
    }

    /// Make a DELETE request, ignoring any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("[BackofficeApi] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body));
        }
        Ok(())
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Transport(format!("Failed to parse response: {} - {}", e, body)))
    }

    /// Extract the best human-readable message from an error body.
    fn status_error(status: reqwest::StatusCode, body: &str) -> Error {
        if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
            if let Some(msg) = err.detail.or(err.message).or(err.error) {
                return Error::Api(msg);
            }
        }
        Error::Api(format!(
            "HTTP {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;

    fn test_client(base_url: &str) -> BackofficeApiClient {
        BackofficeApiClient::new(base_url, Arc::new(StaticToken::new("test-token"))).unwrap()
    }

    #[test]
    fn test_client_url_normalization() {
        let client = test_client("https://backoffice.example.com/");
        assert_eq!(client.base_url(), "https://backoffice.example.com");
    }

    #[test]
    fn test_query_encoding() {
        let client = test_client("https://backoffice.example.com");
        let url = client.url_with_query(
            "/api/transactions",
            &[
                ("limit", "50".to_string()),
                ("transaction_type", "NON SALE CHARGE".to_string()),
            ],
        );
        assert_eq!(
            url,
            "https://backoffice.example.com/api/transactions?limit=50&transaction_type=NON%20SALE%20CHARGE"
        );
    }

    #[test]
    fn test_no_query_leaves_path_untouched() {
        let client = test_client("https://backoffice.example.com");
        let url = client.url_with_query("/api/ebay/disputes", &[]);
        assert_eq!(url, "https://backoffice.example.com/api/ebay/disputes");
    }

    #[test]
    fn test_missing_token_surfaces_as_auth_error() {
        let client =
            BackofficeApiClient::new("https://backoffice.example.com", Arc::new(StaticToken::new("")))
                .unwrap();
        assert!(matches!(client.headers(), Err(Error::Auth(_))));
    }

    #[test]
    fn test_error_detail_extraction() {
        let err = BackofficeApiClient::status_error(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"detail": "shipping_group already mapped"}"#,
        );
        assert_eq!(err.to_string(), "API error: shipping_group already mapped");
    }

    #[test]
    fn test_error_fallback_truncates_body() {
        let body = "x".repeat(500);
        let err = BackofficeApiClient::status_error(reqwest::StatusCode::BAD_GATEWAY, &body);
        let msg = err.to_string();
        assert!(msg.contains("HTTP 502"));
        assert!(msg.len() < 300);
    }
}
