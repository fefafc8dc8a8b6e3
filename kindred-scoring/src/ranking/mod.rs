//! RankingPipeline: score candidates in parallel → filter → sort → truncate.

pub mod combine;
pub mod reasons;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, warn};

use kindred_core::cancel::CancelToken;
use kindred_core::config::ScoringConfig;
use kindred_core::errors::ScoringError;
use kindred_core::models::{CompatibilityResult, Group, MemberProfile, SubScores, TargetKind};

use crate::group_fit;
use crate::proximity;
use crate::similarity;

/// Ranked results plus the count of malformed candidates skipped along the
/// way. Skips never abort the batch.
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub results: Vec<CompatibilityResult>,
    pub skipped: usize,
}

enum Evaluation {
    Scored(CompatibilityResult),
    Skipped,
}

/// The ranking pipeline. Candidate evaluation is embarrassingly parallel
/// (scorers are pure); the filter/sort/truncate tail is single-threaded so
/// ordering stays deterministic: identical inputs produce identical
/// ordered output, which the result cache depends on.
pub struct RankingPipeline {
    config: ScoringConfig,
}

impl RankingPipeline {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Rank person candidates for a requester.
    pub fn rank_persons(
        &self,
        requester: &MemberProfile,
        candidates: &[MemberProfile],
        limit: usize,
        min_score: f64,
        now: DateTime<Utc>,
        cancel: &CancelToken,
    ) -> Result<RankOutcome, ScoringError> {
        combine::validate_person(&self.config.person_weights)?;
        debug!(
            requester = requester.id(),
            candidates = candidates.len(),
            "ranking person candidates"
        );

        let evaluated: Vec<Option<Evaluation>> = candidates
            .par_iter()
            .map(|candidate| {
                if cancel.is_cancelled() {
                    return None;
                }
                Some(self.evaluate_person(requester, candidate, now))
            })
            .collect();

        self.finish(evaluated, candidates.len(), limit, min_score, cancel)
    }

    /// Rank group candidates for a requester.
    pub fn rank_groups(
        &self,
        requester: &MemberProfile,
        candidates: &[Group],
        limit: usize,
        min_score: f64,
        now: DateTime<Utc>,
        cancel: &CancelToken,
    ) -> Result<RankOutcome, ScoringError> {
        combine::validate_group(&self.config.group_weights)?;
        debug!(
            requester = requester.id(),
            candidates = candidates.len(),
            "ranking group candidates"
        );

        let evaluated: Vec<Option<Evaluation>> = candidates
            .par_iter()
            .map(|candidate| {
                if cancel.is_cancelled() {
                    return None;
                }
                Some(self.evaluate_group(requester, candidate, now))
            })
            .collect();

        self.finish(evaluated, candidates.len(), limit, min_score, cancel)
    }

    fn evaluate_person(
        &self,
        requester: &MemberProfile,
        candidate: &MemberProfile,
        now: DateTime<Utc>,
    ) -> Evaluation {
        if candidate.id().is_empty() {
            return Evaluation::Skipped;
        }

        let sim = similarity::score(requester, candidate);
        let prox = proximity::score(
            requester.member.location,
            candidate.member.location,
            self.config.proximity_scale_km,
        );

        let scores = SubScores {
            similarity: Some(sim.score),
            proximity: prox.score(),
            ..SubScores::default()
        };
        let overall = combine::combine_person(&self.config.person_weights, &scores);
        let reasons = reasons::person_reasons(&sim.shared, &prox, &self.config.reason_thresholds);

        Evaluation::Scored(CompatibilityResult {
            target_id: candidate.id().to_string(),
            target_kind: TargetKind::Person,
            scores,
            overall,
            reasons,
            computed_at: now,
        })
    }

    fn evaluate_group(
        &self,
        requester: &MemberProfile,
        candidate: &Group,
        now: DateTime<Utc>,
    ) -> Evaluation {
        if candidate.id.is_empty() || !candidate.has_valid_bounds() {
            return Evaluation::Skipped;
        }

        let sim = similarity::tag_score(requester, &candidate.tags);
        let prox = proximity::score(
            requester.member.location,
            candidate.location,
            self.config.proximity_scale_km,
        );
        let fit = group_fit::score(&requester.member.preferred_group_types, candidate);

        let scores = SubScores {
            similarity: Some(sim.score),
            proximity: prox.score(),
            size_fit: Some(fit.size_fit),
            type_fit: Some(fit.type_fit),
        };
        let overall = combine::combine_group(&self.config.group_weights, &scores);
        let reasons = reasons::group_reasons(
            &sim.shared,
            &prox,
            &fit,
            candidate,
            &self.config.reason_thresholds,
        );

        Evaluation::Scored(CompatibilityResult {
            target_id: candidate.id.clone(),
            target_kind: TargetKind::Group,
            scores,
            overall,
            reasons,
            computed_at: now,
        })
    }

    fn finish(
        &self,
        evaluated: Vec<Option<Evaluation>>,
        total: usize,
        limit: usize,
        min_score: f64,
        cancel: &CancelToken,
    ) -> Result<RankOutcome, ScoringError> {
        if cancel.is_cancelled() {
            let scored = evaluated.iter().filter(|e| e.is_some()).count();
            return Err(ScoringError::Cancelled { scored, total });
        }

        let mut skipped = 0;
        let mut results = Vec::with_capacity(total);
        for eval in evaluated.into_iter().flatten() {
            match eval {
                Evaluation::Scored(result) => results.push(result),
                Evaluation::Skipped => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(skipped, total, "skipped malformed candidates");
        }

        // Threshold first: output size is bounded independent of limit.
        results.retain(|r| r.overall >= min_score);

        // Deterministic order: overall desc, similarity desc, id asc.
        results.sort_by(|a, b| {
            b.overall
                .partial_cmp(&a.overall)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let sim_a = a.scores.similarity.unwrap_or(0.0);
                    let sim_b = b.scores.similarity.unwrap_or(0.0);
                    sim_b
                        .partial_cmp(&sim_a)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.target_id.cmp(&b.target_id))
        });

        results.truncate(limit);
        Ok(RankOutcome { results, skipped })
    }
}
