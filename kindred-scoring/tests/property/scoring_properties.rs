//! Property tests for the scorers and the ranking pipeline.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use kindred_core::cancel::CancelToken;
use kindred_core::config::ScoringConfig;
use kindred_core::models::{GeoPoint, MemberProfile};
use kindred_scoring::ranking::RankingPipeline;
use kindred_scoring::{proximity, similarity};
use test_fixtures::member;

const INTEREST_POOL: [&str; 8] = [
    "Woodworking",
    "Hiking",
    "Fishing",
    "Chess",
    "Baking",
    "Photography",
    "Gardening",
    "Climbing",
];

fn arb_profile(id: &'static str) -> impl Strategy<Value = MemberProfile> {
    (
        proptest::collection::btree_map(0usize..INTEREST_POOL.len(), 1u8..=5, 0..6),
        proptest::option::of((-80.0f64..80.0, -170.0f64..170.0)),
    )
        .prop_map(move |(interests, location)| {
            let mut builder = member(id);
            for (idx, prof) in interests {
                builder = builder.interested_in(INTEREST_POOL[idx], prof);
            }
            if let Some((lat, lon)) = location {
                builder = builder.located(lat, lon);
            }
            builder.build()
        })
}

proptest! {
    #[test]
    fn similarity_stays_in_unit_interval(
        a in arb_profile("a"),
        b in arb_profile("b"),
    ) {
        let out = similarity::score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&out.score));
    }

    #[test]
    fn similarity_is_symmetric(
        a in arb_profile("a"),
        b in arb_profile("b"),
    ) {
        let ab = similarity::score(&a, &b).score;
        let ba = similarity::score(&b, &a).score;
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn self_similarity_is_one_or_empty(a in arb_profile("a")) {
        let out = similarity::score(&a, &a);
        if a.interests.is_empty() {
            prop_assert_eq!(out.score, 0.0);
        } else {
            prop_assert!((out.score - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn proximity_stays_in_unit_interval(
        lat_a in -90.0f64..90.0, lon_a in -180.0f64..180.0,
        lat_b in -90.0f64..90.0, lon_b in -180.0f64..180.0,
    ) {
        let a = GeoPoint::new(lat_a, lon_a);
        let b = GeoPoint::new(lat_b, lon_b);
        let score = proximity::score(Some(a), Some(b), 25.0)
            .score()
            .expect("both points present");
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn proximity_decreases_along_a_meridian(
        lat in 0.0f64..45.0,
        step in 0.1f64..10.0,
    ) {
        let origin = GeoPoint::new(0.0, 0.0);
        let near = GeoPoint::new(lat, 0.0);
        let far = GeoPoint::new(lat + step, 0.0);
        let s_near = proximity::score(Some(origin), Some(near), 25.0).score().unwrap();
        let s_far = proximity::score(Some(origin), Some(far), 25.0).score().unwrap();
        prop_assert!(s_near >= s_far);
    }

    #[test]
    fn ranking_respects_limit_floor_and_order(
        profiles in proptest::collection::vec(arb_profile("c"), 0..30),
        limit in 1usize..20,
        min_score in 0.0f64..0.5,
    ) {
        // Re-key candidates so ids are unique and orderable.
        let candidates: Vec<MemberProfile> = profiles
            .into_iter()
            .enumerate()
            .map(|(i, mut p)| {
                p.member.id = format!("c{i:03}");
                p
            })
            .collect();
        let requester = member("req").interested_in("Woodworking", 3).build();
        let pipeline = RankingPipeline::new(ScoringConfig::default());
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let outcome = pipeline
            .rank_persons(&requester, &candidates, limit, min_score, now, &CancelToken::new())
            .expect("no cancellation");

        prop_assert!(outcome.results.len() <= limit);
        for r in &outcome.results {
            prop_assert!(r.overall >= min_score);
            prop_assert!((0.0..=1.0).contains(&r.overall));
        }
        for pair in outcome.results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ordered = a.overall > b.overall
                || (a.overall == b.overall
                    && (a.scores.similarity.unwrap_or(0.0) > b.scores.similarity.unwrap_or(0.0)
                        || (a.scores.similarity == b.scores.similarity
                            && a.target_id < b.target_id)));
            prop_assert!(ordered, "order violated: {a:?} then {b:?}");
        }
    }

    #[test]
    fn ranking_twice_is_identical(
        profiles in proptest::collection::vec(arb_profile("c"), 0..20),
    ) {
        let candidates: Vec<MemberProfile> = profiles
            .into_iter()
            .enumerate()
            .map(|(i, mut p)| {
                p.member.id = format!("c{i:03}");
                p
            })
            .collect();
        let requester = member("req")
            .interested_in("Hiking", 4)
            .located(51.0, -114.0)
            .build();
        let pipeline = RankingPipeline::new(ScoringConfig::default());
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let first = pipeline
            .rank_persons(&requester, &candidates, 10, 0.0, now, &CancelToken::new())
            .unwrap();
        let second = pipeline
            .rank_persons(&requester, &candidates, 10, 0.0, now, &CancelToken::new())
            .unwrap();
        prop_assert_eq!(first.results, second.results);
    }
}
