//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The service depends on these traits, not on concrete implementations.

mod cache;
mod exchange;
mod http;

pub use cache::Cache;
pub use exchange::ExchangeRateService;
pub use http::{HttpClient, HttpRequest, HttpResponse, RequestFactory};
