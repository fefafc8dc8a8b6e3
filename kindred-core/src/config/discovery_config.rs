use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;
use crate::constants::MAX_CANDIDATE_POOL;

/// Discovery façade configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Cap on the candidate pool fetched per query.
    pub candidate_pool_cap: usize,
    /// Bound on the geospatial nearby-count aggregate. On timeout the
    /// operation resolves to zero, logged as a warning.
    pub nearby_timeout_secs: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            candidate_pool_cap: defaults::DEFAULT_CANDIDATE_POOL_CAP,
            nearby_timeout_secs: defaults::DEFAULT_NEARBY_TIMEOUT_SECS,
        }
    }
}

impl DiscoveryConfig {
    pub fn nearby_timeout(&self) -> Duration {
        Duration::from_secs(self.nearby_timeout_secs)
    }

    /// Pool cap clamped to the workspace-wide hard maximum.
    pub fn effective_pool_cap(&self) -> usize {
        self.candidate_pool_cap.clamp(1, MAX_CANDIDATE_POOL)
    }
}
