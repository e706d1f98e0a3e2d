//! The key-value store contract and a bundled in-memory implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::CacheError;

/// Contract consumed from a TTL-capable key-value store.
///
/// Implementations wrap whatever backend the surrounding application runs
/// (Redis, a sidecar, an in-process map). Both operations are fallible and
/// asynchronous; callers above this trait are responsible for bounding them
/// in time and for surviving every failure.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;
}

/// In-process store keeping values alongside their expiry instant.
///
/// Expired entries are purged lazily on read. Writes are last-write-wins,
/// which is fine for this workload: entries are immutable values keyed by
/// normalized candidate, so two concurrent lookups racing on the same key
/// write the same answer.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: DashMap<String, (String, Instant)>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        if let Some(entry) = self.entries.get(key) {
            let (value, expires_at) = entry.value();
            if Instant::now() < *expires_at {
                return Ok(Some(value.clone()));
            }
        }
        // Drop the read guard before removing.
        self.entries.remove_if(key, |_, (_, expires_at)| Instant::now() >= *expires_at);
        Ok(None)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.entries
            .insert(key.to_string(), (value, Instant::now() + ttl));
        Ok(())
    }
}
