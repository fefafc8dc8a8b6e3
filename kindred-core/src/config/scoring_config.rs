use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_RESULT_LIMIT;

/// Weights for person-to-person aggregation.
///
/// Tunable constants, not fixed truths: the defaults were chosen by
/// observation, not derived from a ranking rationale. Weights are
/// renormalized over the signals actually available for a pair, so a
/// missing signal never penalizes a candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonWeights {
    pub similarity: f64,
    pub proximity: f64,
}

impl Default for PersonWeights {
    fn default() -> Self {
        Self {
            similarity: defaults::DEFAULT_PERSON_SIMILARITY_WEIGHT,
            proximity: defaults::DEFAULT_PERSON_PROXIMITY_WEIGHT,
        }
    }
}

/// Weights for person-to-group aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupWeights {
    pub similarity: f64,
    pub proximity: f64,
    pub size_fit: f64,
    pub type_fit: f64,
}

impl Default for GroupWeights {
    fn default() -> Self {
        Self {
            similarity: defaults::DEFAULT_GROUP_SIMILARITY_WEIGHT,
            proximity: defaults::DEFAULT_GROUP_PROXIMITY_WEIGHT,
            size_fit: defaults::DEFAULT_GROUP_SIZE_FIT_WEIGHT,
            type_fit: defaults::DEFAULT_GROUP_TYPE_FIT_WEIGHT,
        }
    }
}

/// Thresholds above which a sub-score earns a human-readable match reason.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonThresholds {
    /// Shared interest count at which "N shared interests" is emitted.
    pub shared_interests: usize,
    /// Proximity score at which "within X km" is emitted.
    pub proximity_score: f64,
    /// Size-fit score at which the open-spot reason is emitted.
    pub size_fit: f64,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            shared_interests: defaults::DEFAULT_NOTABLE_SHARED_INTERESTS,
            proximity_score: defaults::DEFAULT_NOTABLE_PROXIMITY_SCORE,
            size_fit: defaults::DEFAULT_NOTABLE_SIZE_FIT,
        }
    }
}

/// Scoring subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub person_weights: PersonWeights,
    pub group_weights: GroupWeights,
    /// Floor applied before sorting; bounds output size independent of limit.
    pub min_score: f64,
    /// Result count when the caller does not pass a limit.
    pub default_limit: usize,
    /// Hard cap on any caller-supplied limit.
    pub max_limit: usize,
    /// Exponential decay scale for proximity (km).
    pub proximity_scale_km: f64,
    pub reason_thresholds: ReasonThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            person_weights: PersonWeights::default(),
            group_weights: GroupWeights::default(),
            min_score: defaults::DEFAULT_MIN_SCORE,
            default_limit: defaults::DEFAULT_LIMIT,
            max_limit: MAX_RESULT_LIMIT,
            proximity_scale_km: defaults::DEFAULT_PROXIMITY_SCALE_KM,
            reason_thresholds: ReasonThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Clamp a caller-supplied limit into [1, max_limit], falling back to
    /// the default when absent.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit)
    }

    /// Caller-supplied floor, or the configured default.
    pub fn effective_min_score(&self, requested: Option<f64>) -> f64 {
        requested.unwrap_or(self.min_score).clamp(0.0, 1.0)
    }
}
