//! Shared test fixtures for the Kindred workspace: member and group
//! builders, canned questionnaire responses, and an in-memory repository.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use kindred_core::errors::{DiscoveryError, KindredResult, RepositoryError};
use kindred_core::models::{
    GeoPoint, Group, GroupType, Interest, InterestRating, Member, MemberProfile, Proficiency,
    ResolvedInterest,
};
use kindred_core::traits::{CandidateFilters, Clock, PrivacyFilter, Repository};

/// Reference privacy filter: refuses blocked viewers and hides location
/// from everyone but the profile owner. Redaction runs after ranking.
pub struct LocationHidingFilter;

impl PrivacyFilter for LocationHidingFilter {
    fn redact(&self, profile: &MemberProfile, viewer_id: &str) -> KindredResult<MemberProfile> {
        if profile.has_blocked(viewer_id) {
            return Err(DiscoveryError::Blocked {
                viewer_id: viewer_id.to_string(),
                profile_id: profile.id().to_string(),
            }
            .into());
        }
        let mut redacted = profile.clone();
        if profile.id() != viewer_id {
            redacted.member.location = None;
        }
        Ok(redacted)
    }
}

/// A clock tests can move by hand, so TTL behavior never needs a sleep.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        }
    }
}

impl ManualClock {
    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Builder for a member profile with resolved interests.
pub struct MemberBuilder {
    profile: MemberProfile,
}

/// Start building a member. Fixture timestamps are fixed so snapshots stay
/// stable across runs.
pub fn member(id: &str) -> MemberBuilder {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    MemberBuilder {
        profile: MemberProfile {
            member: Member {
                id: id.to_string(),
                display_name: format!("Member {id}"),
                location: None,
                interests: vec![],
                traits: None,
                archetype: None,
                group_ids: vec![],
                blocked_ids: vec![],
                preferred_group_types: vec![],
                created_at,
            },
            interests: vec![],
        },
    }
}

impl MemberBuilder {
    pub fn located(mut self, latitude: f64, longitude: f64) -> Self {
        self.profile.member.location = Some(GeoPoint::new(latitude, longitude));
        self
    }

    pub fn interested_in(mut self, name: &str, proficiency: u8) -> Self {
        let interest = Interest {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category: "General".to_string(),
        };
        let proficiency = Proficiency::new(proficiency);
        self.profile.member.interests.push(InterestRating {
            interest_id: interest.id.clone(),
            proficiency,
        });
        self.profile.interests.push(ResolvedInterest {
            interest,
            proficiency,
        });
        self
    }

    pub fn prefers(mut self, group_type: GroupType) -> Self {
        self.profile.member.preferred_group_types.push(group_type);
        self
    }

    pub fn in_group(mut self, group_id: &str) -> Self {
        self.profile.member.group_ids.push(group_id.to_string());
        self
    }

    pub fn blocking(mut self, member_id: &str) -> Self {
        self.profile.member.blocked_ids.push(member_id.to_string());
        self
    }

    pub fn build(self) -> MemberProfile {
        self.profile
    }
}

/// Builder for a group.
pub struct GroupBuilder {
    group: Group,
}

pub fn group(id: &str, group_type: GroupType) -> GroupBuilder {
    GroupBuilder {
        group: Group {
            id: id.to_string(),
            name: format!("Group {id}"),
            group_type,
            min_size: 3,
            max_size: 12,
            current_size: 5,
            location: None,
            tags: vec![],
        },
    }
}

impl GroupBuilder {
    pub fn sized(mut self, min: u32, max: u32, current: u32) -> Self {
        self.group.min_size = min;
        self.group.max_size = max;
        self.group.current_size = current;
        self
    }

    pub fn located(mut self, latitude: f64, longitude: f64) -> Self {
        self.group.location = Some(GeoPoint::new(latitude, longitude));
        self
    }

    pub fn tagged(mut self, tags: &[&str]) -> Self {
        self.group.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Group {
        self.group
    }
}

/// A complete 60-item response map with every answer set to `value`.
pub fn uniform_responses(value: u8) -> HashMap<u8, u8> {
    (1..=60).map(|id| (id, value)).collect()
}

/// In-memory repository for integration tests.
#[derive(Default)]
pub struct FixtureRepository {
    pub members: Vec<MemberProfile>,
    pub groups: Vec<Group>,
    pub interests: Vec<Interest>,
    pub nearby_count: u64,
    /// Simulated latency for the nearby-count aggregate.
    pub nearby_delay: Option<Duration>,
    /// When set, every call fails as a backend outage.
    pub unavailable: bool,
}

impl FixtureRepository {
    pub fn new(members: Vec<MemberProfile>, groups: Vec<Group>) -> Self {
        Self {
            members,
            groups,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check_available(&self) -> KindredResult<()> {
        if self.unavailable {
            return Err(RepositoryError::Unavailable {
                reason: "fixture repository marked unavailable".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for FixtureRepository {
    async fn get_member_profile(&self, id: &str) -> KindredResult<Option<MemberProfile>> {
        self.check_available()?;
        Ok(self.members.iter().find(|p| p.id() == id).cloned())
    }

    async fn list_candidate_members(
        &self,
        excluding: &[String],
        filters: &CandidateFilters,
    ) -> KindredResult<Vec<MemberProfile>> {
        self.check_available()?;
        let mut out: Vec<MemberProfile> = self
            .members
            .iter()
            .filter(|p| !excluding.contains(&p.member.id))
            .cloned()
            .collect();
        if let Some(cap) = filters.max_candidates {
            out.truncate(cap);
        }
        Ok(out)
    }

    async fn list_candidate_groups(
        &self,
        excluding: &[String],
        filters: &CandidateFilters,
    ) -> KindredResult<Vec<Group>> {
        self.check_available()?;
        let mut out: Vec<Group> = self
            .groups
            .iter()
            .filter(|g| !excluding.contains(&g.id))
            .filter(|g| filters.group_type.map_or(true, |t| g.group_type == t))
            .cloned()
            .collect();
        if let Some(cap) = filters.max_candidates {
            out.truncate(cap);
        }
        Ok(out)
    }

    async fn get_interests_by_ids(&self, ids: &[String]) -> KindredResult<Vec<Interest>> {
        self.check_available()?;
        Ok(self
            .interests
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn nearby_member_count(&self, _origin: GeoPoint, _radius_km: f64) -> KindredResult<u64> {
        self.check_available()?;
        if let Some(delay) = self.nearby_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.nearby_count)
    }
}
