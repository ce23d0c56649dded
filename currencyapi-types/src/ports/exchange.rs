//! Exchange rate service port.
//!
//! This trait defines the interface callers use to query a rate provider.
//! Implementations can be HTTP adapters, mock providers, etc.

use crate::domain::{Request, Response};
use crate::error::ServiceError;

/// Port trait for exchange rate services.
#[async_trait::async_trait]
pub trait ExchangeRateService: Send + Sync {
    /// Serves a request.
    ///
    /// Predictable failures (unsupported request, unknown pair) come back as
    /// `Ok(Response::Error(..))`; `Err` is reserved for transport, protocol
    /// and cache faults.
    async fn send(&self, request: &Request) -> Result<Response, ServiceError>;

    /// Whether `send` would attempt to serve the request. Pure.
    fn supports(&self, request: &Request) -> bool;
}
