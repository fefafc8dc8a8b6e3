use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;
use super::group::GroupType;
use super::interest::Interest;
use super::proficiency::Proficiency;
use super::trait_vector::{Archetype, TraitVector};

/// A member's rating of one interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRating {
    pub interest_id: String,
    pub proficiency: Proficiency,
}

/// A member of the directory.
///
/// Created at onboarding completion. The trait vector is mutated only by
/// re-running the questionnaire; interests only by explicit profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub display_name: String,
    /// Absent means "no proximity signal", never a penalty.
    pub location: Option<GeoPoint>,
    pub interests: Vec<InterestRating>,
    pub traits: Option<TraitVector>,
    pub archetype: Option<Archetype>,
    pub group_ids: Vec<String>,
    /// Members this member has blocked. Blocked members never appear in
    /// this member's discovery results.
    pub blocked_ids: Vec<String>,
    pub preferred_group_types: Vec<GroupType>,
    pub created_at: DateTime<Utc>,
}

/// An interest rating joined with its catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInterest {
    pub interest: Interest,
    pub proficiency: Proficiency,
}

/// Typed join of a member with their resolved interests. Built once by the
/// repository layer, not reassembled ad hoc at call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub member: Member,
    pub interests: Vec<ResolvedInterest>,
}

impl MemberProfile {
    pub fn id(&self) -> &str {
        &self.member.id
    }

    /// Proficiency for one interest, if the member has it.
    pub fn proficiency(&self, interest_id: &str) -> Option<Proficiency> {
        self.interests
            .iter()
            .find(|r| r.interest.id == interest_id)
            .map(|r| r.proficiency)
    }

    pub fn has_blocked(&self, member_id: &str) -> bool {
        self.member.blocked_ids.iter().any(|id| id == member_id)
    }

    pub fn is_member_of(&self, group_id: &str) -> bool {
        self.member.group_ids.iter().any(|id| id == group_id)
    }
}
