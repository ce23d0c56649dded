//! # currencyapi Cache
//!
//! Concrete cache implementations (adapters) for the currencyapi service.
//! This crate provides adapters that implement the `Cache` port:
//!
//! - [`NullCache`] never stores anything; every lookup is a miss.
//! - [`MemoryCache`] (feature `memory`, on by default) keeps payloads in a
//!   concurrent map with per-entry expiry.
//!
//! # Examples
//!
//! ```ignore
//! let cache = MemoryCache::new();
//! let service = CurrencyApiService::new(config, cache, client, factory);
//! ```

#[cfg(feature = "memory")]
mod memory;
mod null;


#[cfg(feature = "memory")]
pub use memory::MemoryCache;
pub use null::NullCache;
