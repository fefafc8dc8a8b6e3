//! Match-reason generation.
//!
//! Short human-readable strings derived from sub-scores that crossed a
//! notable threshold. Presentation metadata only, never fed back into
//! scoring, and regenerated whenever sub-scores change.

use kindred_core::config::ReasonThresholds;
use kindred_core::models::Group;

use crate::group_fit::GroupFit;
use crate::proximity::ProximitySignal;
use crate::similarity::SharedInterest;

pub fn person_reasons(
    shared: &[SharedInterest],
    proximity: &ProximitySignal,
    thresholds: &ReasonThresholds,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if shared.len() >= thresholds.shared_interests {
        reasons.push(format!("{} shared interests", shared.len()));
    } else if let Some(top) = shared.first() {
        reasons.push(format!("Both into {}", top.name));
    }

    if let ProximitySignal::Scored { score, distance_km } = proximity {
        if *score >= thresholds.proximity_score {
            reasons.push(within_km(*distance_km));
        }
    }

    reasons
}

pub fn group_reasons(
    shared: &[SharedInterest],
    proximity: &ProximitySignal,
    fit: &GroupFit,
    group: &Group,
    thresholds: &ReasonThresholds,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(top) = shared.first() {
        reasons.push(format!("Shares your interest in {}", top.name));
    }

    if fit.type_fit >= 1.0 {
        reasons.push(format!("A {} group, like you prefer", group.group_type));
    }

    if fit.size_fit >= thresholds.size_fit {
        reasons.push("Open spot in a growing circle".to_string());
    }

    if let ProximitySignal::Scored { score, distance_km } = proximity {
        if *score >= thresholds.proximity_score {
            reasons.push(within_km(*distance_km));
        }
    }

    reasons
}

fn within_km(distance_km: f64) -> String {
    // Never claim "within 0 km"; round up to the next whole kilometer.
    format!("Within {} km", distance_km.ceil().max(1.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::models::GroupType;

    fn thresholds() -> ReasonThresholds {
        ReasonThresholds::default()
    }

    fn shared(names: &[(&str, u8)]) -> Vec<SharedInterest> {
        names
            .iter()
            .map(|(name, combined)| SharedInterest {
                name: name.to_string(),
                combined_proficiency: *combined,
            })
            .collect()
    }

    #[test]
    fn counts_shared_interests_when_notable() {
        let reasons = person_reasons(
            &shared(&[("Woodworking", 9), ("Hiking", 4), ("Fishing", 3)]),
            &ProximitySignal::NoLocation,
            &thresholds(),
        );
        assert_eq!(reasons, vec!["3 shared interests"]);
    }

    #[test]
    fn single_shared_interest_is_named() {
        let reasons = person_reasons(
            &shared(&[("Woodworking", 7)]),
            &ProximitySignal::NoLocation,
            &thresholds(),
        );
        assert_eq!(reasons, vec!["Both into Woodworking"]);
    }

    #[test]
    fn nearby_pairs_get_a_distance_reason() {
        let reasons = person_reasons(
            &[],
            &ProximitySignal::Scored {
                score: 0.9,
                distance_km: 3.2,
            },
            &thresholds(),
        );
        assert_eq!(reasons, vec!["Within 4 km"]);
    }

    #[test]
    fn distant_pairs_get_no_distance_reason() {
        let reasons = person_reasons(
            &[],
            &ProximitySignal::Scored {
                score: 0.1,
                distance_km: 60.0,
            },
            &thresholds(),
        );
        assert!(reasons.is_empty());
    }

    #[test]
    fn group_reasons_mention_type_and_room() {
        let group = Group {
            id: "g".to_string(),
            name: "Trail Crew".to_string(),
            group_type: GroupType::Hobby,
            min_size: 3,
            max_size: 10,
            current_size: 4,
            location: None,
            tags: vec![],
        };
        let fit = GroupFit {
            size_fit: 1.0,
            type_fit: 1.0,
        };
        let reasons = group_reasons(
            &shared(&[("Hiking", 8)]),
            &ProximitySignal::NoLocation,
            &fit,
            &group,
            &thresholds(),
        );
        assert_eq!(
            reasons,
            vec![
                "Shares your interest in Hiking",
                "A hobby group, like you prefer",
                "Open spot in a growing circle",
            ]
        );
    }
}
