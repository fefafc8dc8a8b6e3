//! Cache keys composed from requester, operation, and parameters.
//!
//! Different parameterizations of the same operation must never collide,
//! so every parameter that shapes the result is part of the key.

use std::fmt;

use kindred_core::config::CacheCategory;

/// An opaque composed cache key carrying its TTL category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    category: CacheCategory,
    composed: String,
}

impl CacheKey {
    pub fn person_matches(requester_id: &str, limit: usize, min_score: f64) -> Self {
        Self {
            category: CacheCategory::PersonMatches,
            composed: format!("persons:{requester_id}:{limit}:{min_score:.3}"),
        }
    }

    pub fn group_matches(requester_id: &str, limit: usize, min_score: f64) -> Self {
        Self {
            category: CacheCategory::GroupMatches,
            composed: format!("groups:{requester_id}:{limit}:{min_score:.3}"),
        }
    }

    pub fn nearby_count(requester_id: &str, radius_km: f64) -> Self {
        Self {
            category: CacheCategory::NearbyCount,
            composed: format!("nearby:{requester_id}:{radius_km:.1}"),
        }
    }

    pub fn unread_count(requester_id: &str) -> Self {
        Self {
            category: CacheCategory::UnreadCount,
            composed: format!("unread:{requester_id}"),
        }
    }

    pub fn category(&self) -> CacheCategory {
        self.category
    }

    pub fn as_str(&self) -> &str {
        &self.composed
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.composed)
    }
}
