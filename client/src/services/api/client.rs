//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "QUOTEDECK_API_URL";

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Fixed per-request timeout. A timeout surfaces as a generic transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for communicating with the backend API server.
///
/// Carries the fixed configuration every request shares: base URL from the
/// environment, 10 second timeout, and JSON content-type/accept headers.
/// Maintains a connection pool for efficient reuse across requests.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the base URL from `QUOTEDECK_API_URL`
    /// (falling back to localhost for development).
    pub fn new() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path`, attaching the bearer token when the caller
    /// supplies one. A missing token still issues the request; the backend
    /// rejects it if auth is required.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a request, check the documented success status, and decode the body.
///
/// Everything that is not the expected status becomes one normalized error:
/// the message from the backend's `message` field when present, otherwise the
/// status line or transport error text. A 401 maps to [`AppError::Auth`] so
/// callers can fail closed.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    expected: StatusCode,
) -> Result<T> {
    let response = send_checked(request, expected).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Http(format!("failed to parse response: {}", e)))
}

/// Like [`send_json`] but discards the response body. Used by mutations,
/// which are always followed by a refetch.
pub(crate) async fn send_expect(request: RequestBuilder, expected: StatusCode) -> Result<()> {
    send_checked(request, expected).await.map(|_| ())
}

async fn send_checked(
    request: RequestBuilder,
    expected: StatusCode,
) -> Result<reqwest::Response> {
    let response = request.send().await.map_err(|e| {
        tracing::error!(error = %e, "transport error");
        AppError::Http(format!("network error: {}", e))
    })?;

    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);

    match status {
        StatusCode::UNAUTHORIZED => {
            tracing::warn!(status = status.as_u16(), "request rejected as unauthenticated");
            Err(AppError::Auth(message))
        }
        StatusCode::FORBIDDEN => {
            tracing::warn!(status = status.as_u16(), "forbidden access");
            Err(AppError::Http(message))
        }
        StatusCode::INTERNAL_SERVER_ERROR => {
            tracing::error!(status = status.as_u16(), error = %message, "server error");
            Err(AppError::Http(message))
        }
        _ => {
            tracing::warn!(status = status.as_u16(), error = %message, "request failed");
            Err(AppError::Http(message))
        }
    }
}

/// Extract a human-readable message from an error response body, preferring
/// the backend's `message` field and falling back to the status line.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(error_body) = serde_json::from_str::<shared::ErrorBody>(body) {
        if let Some(message) = error_body.message_text() {
            return message;
        }
    }
    format!("request failed with status code: {}", status.as_u16())
}

// Implement ApiService for ApiClient by delegating to the resource modules
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<shared::AuthResponse> {
        super::auth::register(self, username, email, password).await
    }

    async fn login(&self, identifier: String, password: String) -> Result<shared::AuthResponse> {
        super::auth::login(self, identifier, password).await
    }

    async fn list_quotes(
        &self,
        token: &str,
        content: &str,
        sort_by: shared::SortBy,
    ) -> Result<Vec<shared::Quote>> {
        super::quote::list(self, token, content, sort_by).await
    }

    async fn create_quote(&self, token: &str, body: shared::QuoteBody) -> Result<()> {
        super::quote::create(self, token, &body).await
    }

    async fn update_quote(&self, token: &str, id: &str, body: shared::QuoteBody) -> Result<()> {
        super::quote::update(self, token, id, &body).await
    }

    async fn vote_quote(&self, token: &str, id: &str) -> Result<()> {
        super::quote::vote(self, token, id).await
    }

    async fn quotes_by_creator(&self, token: &str) -> Result<Vec<shared::CreatorQuoteCount>> {
        super::chart::quotes_by_creator(self, token).await
    }

    async fn top_voted_quotes(&self, token: &str) -> Result<Vec<shared::TopVotedQuote>> {
        super::chart::top_voted_quotes(self, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_message() {
        let message = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Quote content is required"}"#,
        );
        assert_eq!(message, "Quote content is required");
    }

    #[test]
    fn test_error_message_flattens_validation_array() {
        let message = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"message":["email must be an email","username too short"],"statusCode":400}"#,
        );
        assert_eq!(message, "email must be an email, username too short");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "not json"),
            "request failed with status code: 500"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, ""),
            "request failed with status code: 404"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::with_base_url("http://api.example.com/");
        assert_eq!(client.base_url(), "http://api.example.com");
    }
}
