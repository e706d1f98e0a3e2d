//! Budget-bounded, failure-swallowing façade over a cache store.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::timeout;

use crate::budget::DeadlineBudget;
use crate::cache::CacheStore;
use crate::models::CacheEntry;

/// Thin wrapper that makes the cache safe to consult from the lookup path.
///
/// Every operation is raced against the remaining deadline budget and every
/// failure mode (exhausted budget, backend error, elapsed timeout, payload
/// that no longer decodes) collapses into "no cache effect". The cache can
/// therefore never be the reason a lookup fails.
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Read the entry under `key`, bounded by the remaining budget.
    pub async fn get(&self, key: &str, budget: &DeadlineBudget) -> Option<CacheEntry> {
        let remaining = budget.remaining();
        if remaining.is_zero() {
            return None;
        }

        let raw = match timeout(remaining, self.store.get(key)).await {
            Ok(Ok(Some(raw))) => raw,
            Ok(Ok(None)) => return None,
            Ok(Err(e)) => {
                warn!("cache read failed for '{}': {}", key, e);
                return None;
            }
            Err(_) => {
                warn!("cache read timed out for '{}'", key);
                return None;
            }
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("discarding undecodable cache entry for '{}': {}", key, e);
                None
            }
        }
    }

    /// Write `entry` under `key` with the given TTL, bounded by the
    /// remaining budget. Failures are logged and otherwise ignored.
    pub async fn set(
        &self,
        key: &str,
        entry: &CacheEntry,
        ttl: Duration,
        budget: &DeadlineBudget,
    ) {
        let remaining = budget.remaining();
        if remaining.is_zero() {
            debug!("skipping cache write for '{}': budget exhausted", key);
            return;
        }

        let raw = match serde_json::to_string(entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("cache entry for '{}' failed to encode: {}", key, e);
                return;
            }
        };

        match timeout(remaining, self.store.set(key, raw, ttl)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("cache write failed for '{}': {}", key, e),
            Err(_) => warn!("cache write timed out for '{}'", key),
        }
    }
}
