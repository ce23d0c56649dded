//! # currencyapi Types
//!
//! Domain types and port traits for the currencyapi.com exchange rate adapter.
//! This crate has ZERO external IO dependencies - only data structures,
//! error types, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Provider-agnostic requests and responses, subscription tiers
//! - `ports/` - Trait definitions that adapters must implement (HTTP, cache, service)
//! - `error/` - Soft request errors and hard service faults

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ConversionResponse, ErrorResponse, ExchangeRateResponse, Request, RequestKind, Response,
    Subscription,
};
pub use error::{CacheError, HttpFailure, RequestError, ServiceError, TransportError};
pub use ports::{Cache, ExchangeRateService, HttpClient, HttpRequest, HttpResponse, RequestFactory};
