pub mod cache_config;
pub mod defaults;
pub mod discovery_config;
pub mod scoring_config;

pub use cache_config::{CacheCategory, CacheConfig};
pub use discovery_config::DiscoveryConfig;
pub use scoring_config::{GroupWeights, PersonWeights, ReasonThresholds, ScoringConfig};
