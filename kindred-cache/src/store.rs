//! The TTL-keyed store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use kindred_core::config::CacheConfig;
use kindred_core::models::CompatibilityResult;
use kindred_core::traits::Clock;

use crate::key::CacheKey;

/// What the cache stores: ranked result lists or small counters.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Results(Vec<CompatibilityResult>),
    Count(u64),
}

struct Entry {
    value: CachedValue,
    stored_at: DateTime<Utc>,
}

/// Hit/miss counters. Cheap observability, not a metrics layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Misses caused specifically by an expired entry.
    pub stale_misses: u64,
}

/// TTL-classed result cache.
///
/// An explicit instance injected into the discovery engine, never a
/// package-level singleton, so tests can substitute the clock.
pub struct ResultCache {
    entries: DashMap<String, Entry>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
    stale_misses: AtomicU64,
}

impl ResultCache {
    pub fn new(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            config,
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            stale_misses: AtomicU64::new(0),
        }
    }

    /// Look up a key. An entry past its category TTL reads as a miss and is
    /// left in place for the next write to overwrite.
    pub fn get(&self, key: &CacheKey) -> Option<CachedValue> {
        let ttl = self.config.ttl(key.category());
        match self.entries.get(key.as_str()) {
            Some(entry) => {
                let age = self.clock.now() - entry.stored_at;
                if age.to_std().map_or(true, |age| age <= ttl) {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!(key = %key, "cache hit");
                    Some(entry.value.clone())
                } else {
                    self.stale_misses.fetch_add(1, Ordering::Relaxed);
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    debug!(key = %key, "cache entry stale");
                    None
                }
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "cache miss");
                None
            }
        }
    }

    /// Store a value. Last write wins within a TTL window.
    pub fn set(&self, key: &CacheKey, value: CachedValue) {
        self.entries.insert(
            key.as_str().to_string(),
            Entry {
                value,
                stored_at: self.clock.now(),
            },
        );
    }

    /// Convenience accessor for ranked-result entries.
    pub fn get_results(&self, key: &CacheKey) -> Option<Vec<CompatibilityResult>> {
        match self.get(key)? {
            CachedValue::Results(results) => Some(results),
            CachedValue::Count(_) => None,
        }
    }

    /// Convenience accessor for counter entries.
    pub fn get_count(&self, key: &CacheKey) -> Option<u64> {
        match self.get(key)? {
            CachedValue::Count(count) => Some(count),
            CachedValue::Results(_) => None,
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            stale_misses: self.stale_misses.load(Ordering::Relaxed),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
