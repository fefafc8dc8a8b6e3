//! Questionnaire scoring: responses → trait vector.

use std::collections::HashMap;

use kindred_core::constants::{LIKERT_MAX, LIKERT_MIDPOINT, LIKERT_MIN};
use kindred_core::models::{TraitDimension, TraitVector};

use crate::items::ITEM_BANK;

/// Score a response set into a trait vector.
///
/// Returns `None` unless every one of the 60 items has an in-range response
/// since an incomplete questionnaire is a defined absent outcome, not an error.
/// Partial vectors are never produced.
///
/// Each dimension's score is the mean of its items' effective values
/// (reverse-keyed items flip to `6 - response`), rounded to one decimal.
pub fn score(responses: &HashMap<u8, u8>) -> Option<TraitVector> {
    let mut sums = [0.0f64; 6];
    let mut counts = [0usize; 6];

    for item in &ITEM_BANK {
        let response = *responses.get(&item.id)?;
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&response) {
            return None;
        }
        let effective = if item.reversed {
            (6 - response) as f64
        } else {
            response as f64
        };
        let idx = dimension_index(item.dimension);
        sums[idx] += effective;
        counts[idx] += 1;
    }

    let mut means = [0.0f64; 6];
    for (idx, mean) in means.iter_mut().enumerate() {
        // Unreachable given the complete item bank, but a defined fallback:
        // an unanswered dimension scores the scale midpoint.
        *mean = if counts[idx] == 0 {
            LIKERT_MIDPOINT
        } else {
            round_one_decimal(sums[idx] / counts[idx] as f64)
        };
    }

    Some(TraitVector {
        openness: means[0],
        conscientiousness: means[1],
        extraversion: means[2],
        agreeableness: means[3],
        resilience: means[4],
        spirituality: means[5],
    })
}

fn dimension_index(dimension: TraitDimension) -> usize {
    TraitDimension::ALL
        .iter()
        .position(|d| *d == dimension)
        .unwrap_or(0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
