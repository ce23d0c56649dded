//! Cache port.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::CacheError;

/// A string-keyed get/set-with-expiry cache of parsed JSON payloads.
///
/// Implementations must be safe for concurrent use; races on the same key
/// are last-write-wins.
#[async_trait::async_trait]
pub trait Cache: Send + Sync {
    /// Returns the live value for `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    /// Stores `value` under `key` for `ttl`.
    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError>;
}

#[async_trait::async_trait]
impl<T: Cache + ?Sized> Cache for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError> {
        (**self).set(key, value, ttl).await
    }
}
