//! Group size-fit and type-fit scores.

use kindred_core::models::{Group, GroupType};

/// Fraction of the min→max band past which size-fit starts decaying:
/// a group filling its last quarter is close to full.
const GROWTH_BAND: f64 = 0.75;

/// Size-fit floor just below capacity.
const NEAR_FULL_FLOOR: f64 = 0.2;

/// Type-fit for groups outside the member's preferred types. Non-zero so
/// new or unclassified members still see some groups.
const TYPE_FIT_BASELINE: f64 = 0.3;

/// Independent size and type fit scores, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupFit {
    pub size_fit: f64,
    pub type_fit: f64,
}

/// Score how well a group fits a member's type preferences and how much
/// room it has.
pub fn score(preferred_types: &[GroupType], group: &Group) -> GroupFit {
    GroupFit {
        size_fit: size_fit(group),
        type_fit: type_fit(preferred_types, group.group_type),
    }
}

/// 1.0 for a group at or above minimum with room to grow, decaying toward
/// 0.0 as it approaches capacity or sits far under its minimum.
fn size_fit(group: &Group) -> f64 {
    if !group.has_valid_bounds() || group.current_size >= group.max_size {
        return 0.0;
    }
    if group.current_size < group.min_size {
        // Under-populated: ramps from 0.0 (empty) to 1.0 (at minimum).
        return group.current_size as f64 / group.min_size as f64;
    }

    let band = (group.max_size - group.min_size) as f64;
    if band == 0.0 {
        return 1.0;
    }
    let fill = (group.current_size - group.min_size) as f64 / band;
    if fill <= GROWTH_BAND {
        1.0
    } else {
        let over = (fill - GROWTH_BAND) / (1.0 - GROWTH_BAND);
        1.0 - (1.0 - NEAR_FULL_FLOOR) * over
    }
}

fn type_fit(preferred_types: &[GroupType], group_type: GroupType) -> f64 {
    if preferred_types.contains(&group_type) {
        1.0
    } else {
        TYPE_FIT_BASELINE
    }
}
