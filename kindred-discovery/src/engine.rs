//! DiscoveryEngine: cache-then-compute orchestration over the repository
//! and the ranking pipeline.

use std::sync::Arc;

use tracing::{debug, info, warn};

use kindred_cache::{CacheKey, CachedValue, ResultCache};
use kindred_core::config::DiscoveryConfig;
use kindred_core::errors::{DiscoveryError, KindredResult, ScoringError};
use kindred_core::models::{CompatibilityResult, Group, MemberProfile};
use kindred_core::traits::{CandidateFilters, Clock, Repository};
use kindred_scoring::ranking::{RankOutcome, RankingPipeline};

use crate::options::QueryOptions;

/// The discovery façade.
///
/// All collaborators (repository, cache, pipeline, clock) are injected,
/// so tests can substitute any of them. Holds no per-request state.
pub struct DiscoveryEngine<R: Repository> {
    repository: Arc<R>,
    cache: Arc<ResultCache>,
    pipeline: Arc<RankingPipeline>,
    config: DiscoveryConfig,
    clock: Arc<dyn Clock>,
}

impl<R: Repository + 'static> DiscoveryEngine<R> {
    pub fn new(
        repository: Arc<R>,
        cache: Arc<ResultCache>,
        pipeline: RankingPipeline,
        config: DiscoveryConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            cache,
            pipeline: Arc::new(pipeline),
            config,
            clock,
        }
    }

    /// Ranked compatible members for a requester, excluding the requester
    /// and anyone on their block list.
    pub async fn find_compatible_persons(
        &self,
        requester_id: &str,
        options: &QueryOptions,
    ) -> KindredResult<Vec<CompatibilityResult>> {
        let limit = self.pipeline.config().effective_limit(options.limit);
        let min_score = self.pipeline.config().effective_min_score(options.min_score);
        let key = CacheKey::person_matches(requester_id, limit, min_score);

        if let Some(results) = self.cache.get_results(&key) {
            return Ok(results);
        }

        let excluding = vec![requester_id.to_string()];
        let filters = CandidateFilters {
            group_type: None,
            max_candidates: Some(self.config.effective_pool_cap()),
        };
        let (requester, candidates) = tokio::try_join!(
            self.repository.get_member_profile(requester_id),
            self.repository.list_candidate_members(&excluding, &filters),
        )?;
        let requester = requester.ok_or_else(|| DiscoveryError::RequesterNotFound {
            member_id: requester_id.to_string(),
        })?;

        let candidates: Vec<MemberProfile> = candidates
            .into_iter()
            .filter(|c| !requester.has_blocked(c.id()))
            .collect();
        debug!(
            requester = requester_id,
            candidates = candidates.len(),
            "person candidate pool assembled"
        );

        let outcome = self
            .rank_persons_off_thread(requester, candidates, limit, min_score, options)
            .await?;
        info!(
            requester = requester_id,
            results = outcome.results.len(),
            skipped = outcome.skipped,
            "computed person matches"
        );

        self.cache
            .set(&key, CachedValue::Results(outcome.results.clone()));
        Ok(outcome.results)
    }

    /// Ranked compatible groups for a requester, excluding groups they
    /// already belong to and groups at full capacity.
    pub async fn find_compatible_groups(
        &self,
        requester_id: &str,
        options: &QueryOptions,
    ) -> KindredResult<Vec<CompatibilityResult>> {
        let limit = self.pipeline.config().effective_limit(options.limit);
        let min_score = self.pipeline.config().effective_min_score(options.min_score);
        let key = CacheKey::group_matches(requester_id, limit, min_score);

        if let Some(results) = self.cache.get_results(&key) {
            return Ok(results);
        }

        let filters = CandidateFilters {
            group_type: None,
            max_candidates: Some(self.config.effective_pool_cap()),
        };
        let (requester, candidates) = tokio::try_join!(
            self.repository.get_member_profile(requester_id),
            self.repository.list_candidate_groups(&[], &filters),
        )?;
        let requester = requester.ok_or_else(|| DiscoveryError::RequesterNotFound {
            member_id: requester_id.to_string(),
        })?;

        let candidates: Vec<Group> = candidates
            .into_iter()
            .filter(|g| !g.is_full() && !requester.is_member_of(&g.id))
            .collect();
        debug!(
            requester = requester_id,
            candidates = candidates.len(),
            "group candidate pool assembled"
        );

        let outcome = self
            .rank_groups_off_thread(requester, candidates, limit, min_score, options)
            .await?;
        info!(
            requester = requester_id,
            results = outcome.results.len(),
            skipped = outcome.skipped,
            "computed group matches"
        );

        self.cache
            .set(&key, CachedValue::Results(outcome.results.clone()));
        Ok(outcome.results)
    }

    /// Cache-only read of person matches. A miss returns an empty list,
    /// the signal to fall back to the computing path, never an error.
    pub fn cached_compatibility_scores(
        &self,
        requester_id: &str,
        limit: usize,
    ) -> Vec<CompatibilityResult> {
        let limit = self.pipeline.config().effective_limit(Some(limit));
        let min_score = self.pipeline.config().effective_min_score(None);
        let key = CacheKey::person_matches(requester_id, limit, min_score);
        self.cache.get_results(&key).unwrap_or_default()
    }

    /// Members within `radius_km` of the requester, from the precomputed
    /// geospatial aggregate. Bounded by a timeout that falls back to zero;
    /// an unlocated requester counts zero by definition.
    pub async fn nearby_member_count(
        &self,
        requester_id: &str,
        radius_km: f64,
    ) -> KindredResult<u64> {
        let key = CacheKey::nearby_count(requester_id, radius_km);
        if let Some(count) = self.cache.get_count(&key) {
            return Ok(count);
        }

        let requester = self
            .repository
            .get_member_profile(requester_id)
            .await?
            .ok_or_else(|| DiscoveryError::RequesterNotFound {
                member_id: requester_id.to_string(),
            })?;
        let Some(origin) = requester.member.location else {
            return Ok(0);
        };

        let lookup = self.repository.nearby_member_count(origin, radius_km);
        match tokio::time::timeout(self.config.nearby_timeout(), lookup).await {
            Ok(count) => {
                let count = count?;
                self.cache.set(&key, CachedValue::Count(count));
                Ok(count)
            }
            Err(_) => {
                warn!(
                    requester = requester_id,
                    timeout_secs = self.config.nearby_timeout_secs,
                    "nearby count timed out, falling back to zero"
                );
                Ok(0)
            }
        }
    }

    async fn rank_persons_off_thread(
        &self,
        requester: MemberProfile,
        candidates: Vec<MemberProfile>,
        limit: usize,
        min_score: f64,
        options: &QueryOptions,
    ) -> KindredResult<RankOutcome> {
        let pipeline = Arc::clone(&self.pipeline);
        let cancel = options.cancel.clone();
        let now = self.clock.now();
        let outcome = tokio::task::spawn_blocking(move || {
            pipeline.rank_persons(&requester, &candidates, limit, min_score, now, &cancel)
        })
        .await
        .map_err(|e| ScoringError::RankingFailed {
            reason: e.to_string(),
        })??;
        Ok(outcome)
    }

    async fn rank_groups_off_thread(
        &self,
        requester: MemberProfile,
        candidates: Vec<Group>,
        limit: usize,
        min_score: f64,
        options: &QueryOptions,
    ) -> KindredResult<RankOutcome> {
        let pipeline = Arc::clone(&self.pipeline);
        let cancel = options.cancel.clone();
        let now = self.clock.now();
        let outcome = tokio::task::spawn_blocking(move || {
            pipeline.rank_groups(&requester, &candidates, limit, min_score, now, &cancel)
        })
        .await
        .map_err(|e| ScoringError::RankingFailed {
            reason: e.to_string(),
        })??;
        Ok(outcome)
    }

    /// Cache statistics, for logs and tests.
    pub fn cache_stats(&self) -> kindred_cache::CacheStats {
        self.cache.stats()
    }
}
