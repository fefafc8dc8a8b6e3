use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;

/// Cache categories, each with its own fixed TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheCategory {
    PersonMatches,
    GroupMatches,
    NearbyCount,
    UnreadCount,
}

/// Cache subsystem configuration: per-category TTLs in seconds.
///
/// Staleness windows are deliberately short; entries older than their TTL
/// read as a miss and are overwritten lazily on the next write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub person_matches_ttl_secs: u64,
    pub group_matches_ttl_secs: u64,
    pub nearby_count_ttl_secs: u64,
    pub unread_count_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            person_matches_ttl_secs: defaults::DEFAULT_PERSON_MATCHES_TTL_SECS,
            group_matches_ttl_secs: defaults::DEFAULT_GROUP_MATCHES_TTL_SECS,
            nearby_count_ttl_secs: defaults::DEFAULT_NEARBY_COUNT_TTL_SECS,
            unread_count_ttl_secs: defaults::DEFAULT_UNREAD_COUNT_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self, category: CacheCategory) -> Duration {
        let secs = match category {
            CacheCategory::PersonMatches => self.person_matches_ttl_secs,
            CacheCategory::GroupMatches => self.group_matches_ttl_secs,
            CacheCategory::NearbyCount => self.nearby_count_ttl_secs,
            CacheCategory::UnreadCount => self.unread_count_ttl_secs,
        };
        Duration::from_secs(secs)
    }
}
