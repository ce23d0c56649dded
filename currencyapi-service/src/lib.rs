//! # currencyapi Service
//!
//! Exchange rate adapter for the currencyapi.com v3 API.
//!
//! ## Architecture
//!
//! - `query` - Builds the provider endpoint and query string for a request
//! - `fetcher` - Cache check, HTTP call, cache store; classifies HTTP outcomes
//! - `interpreter` - Pulls the value and as-of date out of a provider payload
//! - `service` - Public entry point, dispatches requests and shapes responses
//!
//! The service is generic over the `Cache`, `HttpClient` and `RequestFactory`
//! ports, so any adapter implementing them can be injected.

pub mod config;
pub mod fetcher;
pub mod interpreter;
mod payload;
pub mod query;
pub mod service;


pub use config::ServiceConfig;
pub use query::{Endpoint, ProviderQuery};
pub use service::CurrencyApiService;
