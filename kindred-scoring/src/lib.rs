//! # kindred-scoring
//!
//! The compatibility scorers and the ranking pipeline.
//!
//! Scorers are pure functions with no shared mutable state, so a batch of
//! candidates is scored in parallel; the sort/truncate step stays
//! single-threaded to keep ordering deterministic.

pub mod group_fit;
pub mod proximity;
pub mod ranking;
pub mod similarity;

pub use group_fit::GroupFit;
pub use proximity::ProximitySignal;
pub use ranking::{RankOutcome, RankingPipeline};
pub use similarity::{SharedInterest, SimilarityOutcome};
