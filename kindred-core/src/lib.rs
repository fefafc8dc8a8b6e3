//! # kindred-core
//!
//! Foundation crate for the Kindred discovery & compatibility engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancel::CancelToken;
pub use config::{CacheConfig, DiscoveryConfig, ScoringConfig};
pub use errors::{KindredError, KindredResult};
pub use models::{
    Archetype, CompatibilityResult, GeoPoint, Group, GroupType, Interest, Member, MemberProfile,
    Proficiency, SubScores, TargetKind, TraitDimension, TraitVector,
};
pub use traits::{Clock, PrivacyFilter, Repository, SystemClock};
