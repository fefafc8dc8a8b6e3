//! End-to-end discovery scenarios over the in-memory fixture repository.

use std::sync::Arc;
use std::time::Duration;

use kindred_cache::ResultCache;
use kindred_core::config::{CacheConfig, DiscoveryConfig, ScoringConfig};
use kindred_core::errors::KindredError;
use kindred_core::models::GroupType;
use kindred_core::traits::{PrivacyFilter, SystemClock};
use kindred_discovery::{DiscoveryEngine, QueryOptions};
use kindred_scoring::ranking::RankingPipeline;
use test_fixtures::{group, member, FixtureRepository, LocationHidingFilter, ManualClock};

fn engine(repository: FixtureRepository) -> DiscoveryEngine<FixtureRepository> {
    engine_with_clock(repository, Arc::new(SystemClock))
}

fn engine_with_clock(
    repository: FixtureRepository,
    clock: Arc<dyn kindred_core::traits::Clock>,
) -> DiscoveryEngine<FixtureRepository> {
    DiscoveryEngine::new(
        Arc::new(repository),
        Arc::new(ResultCache::new(CacheConfig::default(), clock.clone())),
        RankingPipeline::new(ScoringConfig::default()),
        DiscoveryConfig::default(),
        clock,
    )
}

fn community() -> FixtureRepository {
    let a = member("a")
        .interested_in("Woodworking", 3)
        .interested_in("Hiking", 2)
        .located(51.05, -114.07)
        .build();
    let b = member("b")
        .interested_in("Woodworking", 4)
        .interested_in("Fishing", 2)
        .located(51.06, -114.08)
        .build();
    let c = member("c").build();
    FixtureRepository::new(vec![a, b, c], vec![])
}

#[tokio::test]
async fn similar_neighbor_ranks_above_blank_profile() {
    let engine = engine(community());
    let results = engine
        .find_compatible_persons("a", &QueryOptions::default())
        .await
        .unwrap();

    // With the default min-score floor, C (overall 0.0) is dropped and
    // only B surfaces.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].target_id, "b");
    assert!(results[0].overall > 0.0);
    assert!(!results[0].reasons.is_empty());
}

#[tokio::test]
async fn unlocated_member_gets_similarity_only_no_penalty() {
    let engine = engine(community());
    let options = QueryOptions {
        min_score: Some(0.0),
        ..QueryOptions::default()
    };
    let results = engine.find_compatible_persons("a", &options).await.unwrap();

    assert_eq!(results.len(), 2);
    let c = results.iter().find(|r| r.target_id == "c").unwrap();
    assert_eq!(c.scores.proximity, None);
    assert_eq!(c.overall, c.scores.similarity.unwrap());
    assert_eq!(c.overall, 0.0);
}

#[tokio::test]
async fn requester_never_appears_in_their_own_results() {
    let engine = engine(community());
    let options = QueryOptions {
        min_score: Some(0.0),
        ..QueryOptions::default()
    };
    let results = engine.find_compatible_persons("a", &options).await.unwrap();
    assert!(results.iter().all(|r| r.target_id != "a"));
}

#[tokio::test]
async fn blocked_members_are_excluded() {
    let a = member("a")
        .interested_in("Hiking", 3)
        .blocking("b")
        .build();
    let b = member("b").interested_in("Hiking", 3).build();
    let engine = engine(FixtureRepository::new(vec![a, b], vec![]));

    let results = engine
        .find_compatible_persons("a", &QueryOptions::default())
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn unknown_requester_is_an_error_not_empty() {
    let engine = engine(community());
    let err = engine
        .find_compatible_persons("ghost", &QueryOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, KindredError::Discovery(_)));
}

#[tokio::test]
async fn backend_outage_surfaces_as_error_not_empty_results() {
    let engine = engine(FixtureRepository::unavailable());
    let err = engine
        .find_compatible_persons("a", &QueryOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_upstream_unavailable());
}

#[tokio::test]
async fn full_groups_never_appear() {
    let requester = member("a")
        .interested_in("Hiking", 4)
        .prefers(GroupType::Hobby)
        .build();
    let open = group("open", GroupType::Hobby)
        .sized(3, 10, 5)
        .tagged(&["Hiking"])
        .build();
    let full = group("full", GroupType::Hobby)
        .sized(3, 10, 10)
        .tagged(&["Hiking"])
        .build();
    let engine = engine(FixtureRepository::new(vec![requester], vec![open, full]));

    let options = QueryOptions {
        min_score: Some(0.0),
        ..QueryOptions::default()
    };
    let results = engine.find_compatible_groups("a", &options).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].target_id, "open");
}

#[tokio::test]
async fn joined_groups_are_excluded() {
    let requester = member("a")
        .interested_in("Hiking", 4)
        .in_group("mine")
        .build();
    let mine = group("mine", GroupType::Hobby).tagged(&["Hiking"]).build();
    let other = group("other", GroupType::Hobby).tagged(&["Hiking"]).build();
    let engine = engine(FixtureRepository::new(vec![requester], vec![mine, other]));

    let options = QueryOptions {
        min_score: Some(0.0),
        ..QueryOptions::default()
    };
    let results = engine.find_compatible_groups("a", &options).await.unwrap();
    assert!(results.iter().all(|r| r.target_id != "mine"));
}

#[tokio::test]
async fn second_query_is_served_from_cache() {
    let engine = engine(community());
    let options = QueryOptions::default();

    let first = engine.find_compatible_persons("a", &options).await.unwrap();
    let second = engine.find_compatible_persons("a", &options).await.unwrap();

    assert_eq!(first, second);
    let stats = engine.cache_stats();
    assert_eq!(stats.hits, 1);
}

#[tokio::test]
async fn cache_expires_after_ttl() {
    let clock = Arc::new(ManualClock::default());
    let engine = engine_with_clock(community(), clock.clone());
    let options = QueryOptions::default();

    engine.find_compatible_persons("a", &options).await.unwrap();
    clock.advance(chrono::Duration::seconds(121));
    engine.find_compatible_persons("a", &options).await.unwrap();

    let stats = engine.cache_stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.stale_misses, 1);
}

#[tokio::test]
async fn cached_scores_read_is_empty_on_miss() {
    let engine = engine(community());
    assert!(engine.cached_compatibility_scores("a", 10).is_empty());

    engine
        .find_compatible_persons("a", &QueryOptions::default())
        .await
        .unwrap();
    assert!(!engine.cached_compatibility_scores("a", 10).is_empty());
}

#[tokio::test]
async fn nearby_count_times_out_to_zero() {
    let mut repository = community();
    repository.nearby_count = 42;
    repository.nearby_delay = Some(Duration::from_secs(30));
    let engine = DiscoveryEngine::new(
        Arc::new(repository),
        Arc::new(ResultCache::new(
            CacheConfig::default(),
            Arc::new(SystemClock),
        )),
        RankingPipeline::new(ScoringConfig::default()),
        DiscoveryConfig {
            nearby_timeout_secs: 1,
            ..DiscoveryConfig::default()
        },
        Arc::new(SystemClock),
    );

    // Paused time auto-advances when the runtime idles, firing the timeout
    // before the simulated 30 s repository delay completes.
    tokio::time::pause();
    let count = engine.nearby_member_count("a", 10.0).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn nearby_count_returns_aggregate_within_deadline() {
    let mut repository = community();
    repository.nearby_count = 42;
    let engine = engine(repository);
    assert_eq!(engine.nearby_member_count("a", 10.0).await.unwrap(), 42);
}

#[tokio::test]
async fn unlocated_requester_counts_zero_nearby() {
    let unlocated = member("x").build();
    let engine = engine(FixtureRepository::new(vec![unlocated], vec![]));
    assert_eq!(engine.nearby_member_count("x", 10.0).await.unwrap(), 0);
}

#[tokio::test]
async fn privacy_redaction_applies_after_ranking() {
    let engine = engine(community());
    let results = engine
        .find_compatible_persons("a", &QueryOptions::default())
        .await
        .unwrap();

    // The host applies the privacy filter to each surfaced profile; scoring
    // itself saw the full data.
    let repository = community();
    let filter = LocationHidingFilter;
    for result in &results {
        let profile = repository
            .members
            .iter()
            .find(|p| p.id() == result.target_id)
            .unwrap();
        let redacted = filter.redact(profile, "a").unwrap();
        assert_eq!(redacted.member.location, None);
    }
}
