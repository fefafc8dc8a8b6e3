//! Interest-overlap similarity.
//!
//! Weighted Jaccard over interest proficiencies:
//!
//! ```text
//! score = Σ min(prof_a, prof_b) over shared / Σ max(prof_a, prof_b) over union
//! ```
//!
//! Rewards both overlap breadth and overlap depth: two mentors sharing a
//! craft score higher than two novices.

use std::collections::BTreeMap;

use kindred_core::models::MemberProfile;

/// One interest both sides share, for match-reason generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedInterest {
    pub name: String,
    /// Sum of both sides' proficiencies; higher means deeper shared ground.
    pub combined_proficiency: u8,
}

/// Similarity score in [0.0, 1.0] plus the shared interests, sorted by
/// combined proficiency descending (name ascending on ties).
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityOutcome {
    pub score: f64,
    pub shared: Vec<SharedInterest>,
}

impl SimilarityOutcome {
    fn disjoint() -> Self {
        Self {
            score: 0.0,
            shared: Vec::new(),
        }
    }
}

/// Score interest overlap between two member profiles.
pub fn score(a: &MemberProfile, b: &MemberProfile) -> SimilarityOutcome {
    if a.interests.is_empty() || b.interests.is_empty() {
        return SimilarityOutcome::disjoint();
    }

    // BTreeMap keeps union iteration order stable across runs.
    let mut union: BTreeMap<&str, (Option<u8>, Option<u8>)> = BTreeMap::new();
    for r in &a.interests {
        union.entry(r.interest.id.as_str()).or_default().0 = Some(r.proficiency.value());
    }
    for r in &b.interests {
        union.entry(r.interest.id.as_str()).or_default().1 = Some(r.proficiency.value());
    }

    let mut min_sum = 0u32;
    let mut max_sum = 0u32;
    let mut shared = Vec::new();

    for (id, (pa, pb)) in &union {
        match (pa, pb) {
            (Some(pa), Some(pb)) => {
                min_sum += (*pa).min(*pb) as u32;
                max_sum += (*pa).max(*pb) as u32;
                let name = a
                    .interests
                    .iter()
                    .find(|r| r.interest.id == *id)
                    .map(|r| r.interest.name.clone())
                    .unwrap_or_else(|| (*id).to_string());
                shared.push(SharedInterest {
                    name,
                    combined_proficiency: pa + pb,
                });
            }
            (Some(p), None) | (None, Some(p)) => max_sum += *p as u32,
            (None, None) => {}
        }
    }

    if max_sum == 0 {
        return SimilarityOutcome::disjoint();
    }

    shared.sort_by(|x, y| {
        y.combined_proficiency
            .cmp(&x.combined_proficiency)
            .then_with(|| x.name.cmp(&y.name))
    });

    SimilarityOutcome {
        score: (min_sum as f64 / max_sum as f64).clamp(0.0, 1.0),
        shared,
    }
}

/// Score overlap between a member's interests and a group's tag set.
///
/// Tags carry no proficiency, so each matched tag counts the member's own
/// proficiency on both sides and each unmatched entry counts full weight
/// against the union.
pub fn tag_score(profile: &MemberProfile, tags: &[String]) -> SimilarityOutcome {
    if profile.interests.is_empty() || tags.is_empty() {
        return SimilarityOutcome::disjoint();
    }

    let mut min_sum = 0u32;
    let mut max_sum = 0u32;
    let mut shared = Vec::new();

    let mut sorted_interests: Vec<_> = profile.interests.iter().collect();
    sorted_interests.sort_by(|x, y| x.interest.name.cmp(&y.interest.name));

    for r in &sorted_interests {
        let matched = tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&r.interest.name));
        let prof = r.proficiency.value() as u32;
        max_sum += prof;
        if matched {
            min_sum += prof;
            shared.push(SharedInterest {
                name: r.interest.name.clone(),
                combined_proficiency: r.proficiency.value() * 2,
            });
        }
    }

    let unmatched_tags = tags
        .iter()
        .filter(|t| {
            !profile
                .interests
                .iter()
                .any(|r| r.interest.name.eq_ignore_ascii_case(t))
        })
        .count() as u32;
    // Unmatched tags widen the union at midpoint weight.
    max_sum += unmatched_tags * 3;

    if max_sum == 0 {
        return SimilarityOutcome::disjoint();
    }

    shared.sort_by(|x, y| {
        y.combined_proficiency
            .cmp(&x.combined_proficiency)
            .then_with(|| x.name.cmp(&y.name))
    });

    SimilarityOutcome {
        score: (min_sum as f64 / max_sum as f64).clamp(0.0, 1.0),
        shared,
    }
}
