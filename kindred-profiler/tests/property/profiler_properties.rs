//! Property tests for questionnaire scoring and classification.

use std::collections::HashMap;

use kindred_core::models::TraitDimension;
use kindred_profiler::{classify, score};
use proptest::prelude::*;

/// A complete response set: one in-range answer per item.
fn complete_responses() -> impl Strategy<Value = HashMap<u8, u8>> {
    proptest::collection::vec(1u8..=5, 60).prop_map(|answers| {
        answers
            .into_iter()
            .enumerate()
            .map(|(i, v)| ((i + 1) as u8, v))
            .collect()
    })
}

proptest! {
    #[test]
    fn every_dimension_stays_on_the_likert_scale(responses in complete_responses()) {
        let vector = score(&responses).expect("complete set must score");
        for dim in TraitDimension::ALL {
            let value = vector.get(dim);
            prop_assert!((1.0..=5.0).contains(&value), "{dim} = {value}");
        }
    }

    #[test]
    fn scores_round_to_one_decimal(responses in complete_responses()) {
        let vector = score(&responses).expect("complete set must score");
        for dim in TraitDimension::ALL {
            let value = vector.get(dim);
            let rescaled = value * 10.0;
            prop_assert!((rescaled - rescaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn dropping_any_item_scores_absent(
        responses in complete_responses(),
        missing in 1u8..=60,
    ) {
        let mut partial = responses;
        partial.remove(&missing);
        prop_assert_eq!(score(&partial), None);
    }

    #[test]
    fn same_vector_always_classifies_the_same(responses in complete_responses()) {
        let vector = score(&responses).expect("complete set must score");
        prop_assert_eq!(classify(&vector), classify(&vector));
    }
}
