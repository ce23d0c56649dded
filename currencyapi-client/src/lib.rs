//! # currencyapi Client
//!
//! HTTP adapters implementing the `HttpClient` and `RequestFactory` ports
//! on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use currencyapi_types::{HttpClient, HttpRequest, HttpResponse, RequestFactory, TransportError};
use reqwest::{Client, Method};
use tracing::debug;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for client construction.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// `HttpClient` backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    /// Creates a client with the default request timeout.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| TransportError(format!("Invalid HTTP method: {}", e)))?;

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        debug!(method = %request.method, url = %request.redacted_url(), "sending request");
        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError(e.without_url().to_string()))?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(n, v)| v.to_str().ok().map(|v| (n.to_string(), v.to_string())))
            .collect();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError(e.without_url().to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Builds plain requests that ask for JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    fn create_request(&self, method: &str, url: &str) -> HttpRequest {
        HttpRequest::new(method, url).with_header("Accept", "application/json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_sets_accept_header() {
        let req = DefaultRequestFactory.create_request("GET", "https://example.test/");
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "https://example.test/");
        assert_eq!(req.header_line("accept").as_deref(), Some("application/json"));
        assert!(!req.has_header("User-Agent"));
    }

    #[test]
    fn test_client_creation() {
        assert!(ReqwestHttpClient::new().is_ok());
        assert!(ReqwestHttpClient::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_wrapped_client_reports_transport_errors() {
        let client = ReqwestHttpClient::from_client(Client::new());
        let err = client
            .send(HttpRequest::new("GET", "http://127.0.0.1:1/latest?apikey=secret"))
            .await
            .unwrap_err();
        assert!(!err.0.contains("secret"));
    }

    #[tokio::test]
    async fn test_invalid_method_is_transport_error() {
        let client = ReqwestHttpClient::new().unwrap();
        let err = client
            .send(HttpRequest::new("NOT A METHOD", "https://example.test/"))
            .await
            .unwrap_err();
        assert!(err.0.starts_with("Invalid HTTP method"));
    }
}
