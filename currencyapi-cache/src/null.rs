use std::time::Duration;

use async_trait::async_trait;
use currencyapi_types::{Cache, CacheError};
use serde_json::Value;

/// A cache that forgets everything: every call reaches the provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

#[async_trait]
impl Cache for NullCache {
    async fn get(&self, _key: &str) -> Result<Option<Value>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Value, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }
}
