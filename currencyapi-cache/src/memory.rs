//! In-process cache backed by a sharded concurrent map.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use currencyapi_types::{Cache, CacheError};
use dashmap::DashMap;
use serde_json::Value;
use tracing::trace;

struct Entry {
    value: Value,
    /// `None` when the TTL is too large to represent.
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Per-process payload cache.
///
/// Clones share the same storage. Expired entries are evicted lazily on
/// read, or eagerly with [`MemoryCache::purge_expired`].
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<DashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_live(now) {
                return Ok(Some(entry.value.clone()));
            }
        }

        // The read guard is released above; removing under it would deadlock the shard.
        if self
            .entries
            .remove_if(key, |_, entry| !entry.is_live(now))
            .is_some()
        {
            trace!(key, "evicted expired cache entry");
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError> {
        if ttl.is_zero() {
            self.entries.remove(key);
            return Ok(());
        }

        let entry = Entry {
            value,
            expires_at: Instant::now().checked_add(ttl),
        };
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }
}
