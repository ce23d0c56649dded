//! Error types for the exchange rate service.
//!
//! Two families:
//! - [`RequestError`] is *soft*: returned inside [`crate::Response::Error`] so
//!   callers can branch on it without aborting.
//! - [`ServiceError`] is *hard*: returned as `Err` and never cached.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::RequestKind;
use crate::ports::{HttpRequest, HttpResponse};

/// Soft, typed request failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
    #[error("Unsupported request type: \"{kind}\"")]
    RequestNotSupported { kind: RequestKind },

    #[error("Unable to find exchange rate for {base}/{quote}{}", on_date(.date))]
    ExchangeRateNotFound {
        base: String,
        quote: String,
        date: Option<NaiveDate>,
        #[source]
        cause: Option<HttpFailure>,
    },

    #[error("Unable to convert {} {base} to {quote}{}", .amount.normalize(), on_date(.date))]
    ConversionNotPerformed {
        amount: Decimal,
        base: String,
        quote: String,
        date: Option<NaiveDate>,
        #[source]
        cause: Option<HttpFailure>,
    },
}

fn on_date(date: &Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!(" on {}", d.format("%Y-%m-%d")),
        None => String::new(),
    }
}

impl RequestError {
    /// The provider rejection that triggered this error, if any.
    pub fn cause(&self) -> Option<&HttpFailure> {
        match self {
            RequestError::RequestNotSupported { .. } => None,
            RequestError::ExchangeRateNotFound { cause, .. }
            | RequestError::ConversionNotPerformed { cause, .. } => cause.as_ref(),
        }
    }
}

/// A non-success HTTP exchange, kept whole for diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
#[error("HTTP error {status}: {message}")]
pub struct HttpFailure {
    pub status: u16,
    pub message: String,
    pub request: HttpRequest,
    pub response: HttpResponse,
}

impl HttpFailure {
    /// Builds a failure from an exchange, pulling a human-readable message
    /// out of a JSON `message` or `error` field when the body has one.
    pub fn from_response(request: HttpRequest, response: HttpResponse) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                let body = response.body.trim();
                if body.is_empty() {
                    "empty response body".to_string()
                } else {
                    body.to_string()
                }
            });

        Self {
            status: response.status,
            message,
            request,
            response,
        }
    }
}

/// Connectivity-level failure raised by an [`crate::HttpClient`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Failure raised by a [`crate::Cache`] backend.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CacheError(pub String);

/// Hard faults that abort a call.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Http(#[from] HttpFailure),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn failure(status: u16, body: &str) -> HttpFailure {
        HttpFailure::from_response(
            HttpRequest::new("GET", "https://api.currencyapi.com/v3/latest?apikey=x"),
            HttpResponse::new(status, body),
        )
    }

    #[test]
    fn test_rate_not_found_message() {
        let err = RequestError::ExchangeRateNotFound {
            base: "EUR".into(),
            quote: "RUB".into(),
            date: None,
            cause: None,
        };
        assert_eq!(err.to_string(), "Unable to find exchange rate for EUR/RUB");
    }

    #[test]
    fn test_conversion_message_with_date() {
        let err = RequestError::ConversionNotPerformed {
            amount: dec!(1234.56),
            base: "EUR".into(),
            quote: "TRY".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 13),
            cause: None,
        };
        assert_eq!(
            err.to_string(),
            "Unable to convert 1234.56 EUR to TRY on 2025-06-13"
        );
    }

    #[test]
    fn test_conversion_message_drops_trailing_zeros() {
        let err = RequestError::ConversionNotPerformed {
            amount: dec!(1.50),
            base: "EUR".into(),
            quote: "TRY".into(),
            date: None,
            cause: None,
        };
        assert_eq!(err.to_string(), "Unable to convert 1.5 EUR to TRY");
    }

    #[test]
    fn test_http_failure_uses_json_message() {
        let err = failure(401, r#"{"message":"Invalid authentication credentials"}"#);
        assert_eq!(err.status, 401);
        assert_eq!(
            err.to_string(),
            "HTTP error 401: Invalid authentication credentials"
        );
    }

    #[test]
    fn test_http_failure_falls_back_to_body() {
        assert_eq!(failure(500, "oops\n").message, "oops");
        assert_eq!(failure(502, "").message, "empty response body");
    }

    #[test]
    fn test_cause_is_exposed() {
        let err = RequestError::ConversionNotPerformed {
            amount: dec!(1),
            base: "XBT".into(),
            quote: "USD".into(),
            date: None,
            cause: Some(failure(422, "{}")),
        };
        assert_eq!(err.cause().map(|c| c.status), Some(422));
        assert!(std::error::Error::source(&err).is_some());
    }
}
