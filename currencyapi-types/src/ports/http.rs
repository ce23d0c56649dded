//! HTTP transport ports.
//!
//! Requests and responses are plain values so the ports stay independent
//! of any particular HTTP library.

use std::fmt;
use std::sync::Arc;

use crate::error::TransportError;

/// Query parameters whose values never appear in logs or `Debug` output.
const SECRET_PARAMS: &[&str] = &["apikey"];

/// An outbound HTTP request.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Replaces every value of `name` (case-insensitive) with `value`.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Adds a value for `name`, keeping existing ones.
    pub fn with_added_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// All values of `name` joined with `", "`, or `None` when absent.
    pub fn header_line(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The URL with secret query parameter values masked.
    pub fn redacted_url(&self) -> String {
        let Some((path, query)) = self.url.split_once('?') else {
            return self.url.clone();
        };
        let query = query
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some((key, _)) if SECRET_PARAMS.contains(&key) => format!("{}=***", key),
                _ => pair.to_string(),
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", path, query)
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.redacted_url())
            .field("headers", &self.headers)
            .finish()
    }
}

/// A received HTTP response with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Sends requests over the network.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends `request`. Any HTTP status is a successful exchange; only
    /// connectivity failures are errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Builds requests for a method and URL, possibly with default headers.
pub trait RequestFactory: Send + Sync {
    fn create_request(&self, method: &str, url: &str) -> HttpRequest;
}

#[async_trait::async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

impl<T: RequestFactory + ?Sized> RequestFactory for Arc<T> {
    fn create_request(&self, method: &str, url: &str) -> HttpRequest {
        (**self).create_request(method, url)
    }
}
