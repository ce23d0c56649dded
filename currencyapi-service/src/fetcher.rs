//! Cached provider calls.
//!
//! Cache check, then HTTP call, then cache store. Only parsed `200`
//! payloads are ever stored.

use std::time::Duration;

use currencyapi_types::{Cache, HttpClient, HttpFailure, RequestFactory, ServiceError};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Prefix keeping this adapter's entries apart in a shared cache.
pub const CACHE_NAMESPACE: &str = "peso|curapi|";

const USER_AGENT: &str = "User-Agent";

/// Outcome of a fetch that reached a conclusion without a hard fault.
#[derive(Debug)]
pub enum Fetched {
    /// Parsed provider payload, fresh or cached.
    Payload(Value),
    /// The provider answered `422`: it understood the request but rejected
    /// its content (unknown currency, unsupported date...).
    Rejected(HttpFailure),
}

/// Cache key for a provider URL.
pub fn cache_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    format!("{}{}", CACHE_NAMESPACE, hex::encode(digest))
}

/// `User-Agent` for outbound calls, appended to any value already set.
pub fn user_agent(existing: Option<&str>) -> String {
    let ours = format!(
        "{}/{} (CurrencyAPI)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    match existing.map(str::trim).filter(|s| !s.is_empty()) {
        Some(existing) => format!("{} {}", existing, ours),
        None => ours,
    }
}

/// Owns the collaborators needed to turn a URL into a payload.
pub struct RateFetcher<C, H, F> {
    cache: C,
    http: H,
    factory: F,
    ttl: Duration,
}

impl<C: Cache, H: HttpClient, F: RequestFactory> RateFetcher<C, H, F> {
    pub fn new(cache: C, http: H, factory: F, ttl: Duration) -> Self {
        Self {
            cache,
            http,
            factory,
            ttl,
        }
    }

    /// Returns the payload for `url`, from cache when possible.
    ///
    /// `422` comes back as [`Fetched::Rejected`]; any other non-`200`
    /// status is [`ServiceError::Http`]. Neither is cached.
    pub async fn fetch(&self, url: &str) -> Result<Fetched, ServiceError> {
        let key = cache_key(url);

        if let Some(payload) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(Fetched::Payload(payload));
        }

        let request = self.factory.create_request("GET", url);
        let existing = request.header_line(USER_AGENT);
        let request = request.with_header(USER_AGENT, user_agent(existing.as_deref()));

        debug!(%key, url = %request.redacted_url(), "cache miss, calling provider");
        let response = self.http.send(request.clone()).await?;

        match response.status {
            200 => {
                let payload = parse_payload(&response.body)?;
                self.cache.set(&key, payload.clone(), self.ttl).await?;
                Ok(Fetched::Payload(payload))
            }
            422 => {
                let failure = HttpFailure::from_response(request, response);
                warn!(message = %failure.message, "provider rejected request");
                Ok(Fetched::Rejected(failure))
            }
            status => {
                let failure = HttpFailure::from_response(request, response);
                warn!(status, message = %failure.message, "provider call failed");
                Err(failure.into())
            }
        }
    }
}

/// Parses a `200` body. The provider always sends a non-empty object.
fn parse_payload(body: &str) -> Result<Value, ServiceError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| ServiceError::UnexpectedResponse(format!("invalid JSON: {}", e)))?;

    match &payload {
        Value::Object(map) if !map.is_empty() => Ok(payload),
        _ => Err(ServiceError::UnexpectedResponse(
            "No rates in the response".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_namespaced_sha256() {
        let key = cache_key("https://api.currencyapi.com/v3/latest?apikey=x&base_currency=EUR");
        assert!(key.starts_with("peso|curapi|"));
        assert_eq!(key.len(), CACHE_NAMESPACE.len() + 64);
    }

    #[test]
    fn test_cache_key_is_stable_and_url_sensitive() {
        let a = "https://api.currencyapi.com/v3/latest?apikey=x&base_currency=EUR";
        let b = "https://api.currencyapi.com/v3/latest?apikey=x&base_currency=USD";
        assert_eq!(cache_key(a), cache_key(a));
        assert_ne!(cache_key(a), cache_key(b));
    }

    #[test]
    fn test_user_agent_appends_to_existing() {
        let ours = user_agent(None);
        assert!(ours.starts_with("currencyapi-service/"));
        assert!(ours.ends_with("(CurrencyAPI)"));
        assert_eq!(user_agent(Some("my-app/2.0")), format!("my-app/2.0 {}", ours));
        assert_eq!(user_agent(Some("  ")), ours);
    }

    #[test]
    fn test_parse_payload_rejects_empty_structures() {
        assert!(parse_payload("").is_err());
        assert!(parse_payload("null").is_err());
        assert!(parse_payload("{}").is_err());
        assert!(parse_payload("[]").is_err());
        assert!(parse_payload("<html>").is_err());
        assert!(parse_payload(r#"{"data":{}}"#).is_ok());
    }
}
