//! # kindred-discovery
//!
//! The discovery façade: given a requester, produce ranked compatible
//! persons or groups, serving repeated requests from the result cache.
//!
//! Read-only over the repository; never mutates stored data. Privacy
//! redaction is the caller's step, applied after ranking.

pub mod engine;
pub mod options;

pub use engine::DiscoveryEngine;
pub use options::QueryOptions;
