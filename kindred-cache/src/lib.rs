//! # kindred-cache
//!
//! TTL-classed cache in front of the ranking pipeline's expensive paths.
//!
//! Entries older than their category's TTL read as a miss and are
//! overwritten lazily by the next write, never proactively evicted.
//! Concurrent misses may each recompute; values are idempotently
//! recomputable, so last-write-wins is correct, just occasionally
//! wasteful.

pub mod key;
pub mod store;

pub use key::CacheKey;
pub use store::{CacheStats, CachedValue, ResultCache};
