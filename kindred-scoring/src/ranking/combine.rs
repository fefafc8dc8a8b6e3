//! Weighted combination of available sub-scores.
//!
//! Weights are renormalized over only the signals present for a pair, so
//! an unlocated member's overall score is exactly their similarity score,
//! not a penalized fraction of it.

use kindred_core::config::{GroupWeights, PersonWeights};
use kindred_core::errors::ScoringError;
use kindred_core::models::SubScores;

pub fn validate_person(weights: &PersonWeights) -> Result<(), ScoringError> {
    validate(&[weights.similarity, weights.proximity])
}

pub fn validate_group(weights: &GroupWeights) -> Result<(), ScoringError> {
    validate(&[
        weights.similarity,
        weights.proximity,
        weights.size_fit,
        weights.type_fit,
    ])
}

fn validate(weights: &[f64]) -> Result<(), ScoringError> {
    if weights.iter().any(|w| *w < 0.0 || !w.is_finite()) {
        return Err(ScoringError::InvalidWeights {
            reason: "weights must be finite and non-negative".to_string(),
        });
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(ScoringError::InvalidWeights {
            reason: "at least one weight must be positive".to_string(),
        });
    }
    Ok(())
}

pub fn combine_person(weights: &PersonWeights, scores: &SubScores) -> f64 {
    weighted_mean(&[
        (weights.similarity, scores.similarity),
        (weights.proximity, scores.proximity),
    ])
}

pub fn combine_group(weights: &GroupWeights, scores: &SubScores) -> f64 {
    weighted_mean(&[
        (weights.similarity, scores.similarity),
        (weights.proximity, scores.proximity),
        (weights.size_fit, scores.size_fit),
        (weights.type_fit, scores.type_fit),
    ])
}

fn weighted_mean(pairs: &[(f64, Option<f64>)]) -> f64 {
    let mut sum = 0.0;
    let mut weight_sum = 0.0;
    for (weight, value) in pairs {
        if let Some(value) = value {
            sum += weight * value;
            weight_sum += weight;
        }
    }
    if weight_sum <= 0.0 {
        return 0.0;
    }
    (sum / weight_sum).clamp(0.0, 1.0)
}
