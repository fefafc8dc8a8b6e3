use async_trait::async_trait;

use crate::errors::KindredResult;
use crate::models::{GeoPoint, Group, GroupType, Interest, MemberProfile};

/// Filters for candidate listing. Batch-oriented by design: callers pass id
/// lists and caps, never issue N+1 single-id round-trips.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilters {
    /// Restrict groups to one type.
    pub group_type: Option<GroupType>,
    /// Cap on the number of candidates returned.
    pub max_candidates: Option<usize>,
}

/// Read-only access to the persistent store. The store itself (schema,
/// query execution, indexing) is owned by the host application.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Fetch one member joined with their resolved interests.
    async fn get_member_profile(&self, id: &str) -> KindredResult<Option<MemberProfile>>;

    /// List candidate member profiles, excluding the given ids.
    async fn list_candidate_members(
        &self,
        excluding: &[String],
        filters: &CandidateFilters,
    ) -> KindredResult<Vec<MemberProfile>>;

    /// List candidate groups, excluding the given ids.
    async fn list_candidate_groups(
        &self,
        excluding: &[String],
        filters: &CandidateFilters,
    ) -> KindredResult<Vec<Group>>;

    /// Batch-resolve interest catalog entries.
    async fn get_interests_by_ids(&self, ids: &[String]) -> KindredResult<Vec<Interest>>;

    /// Precomputed geospatial aggregate: members within `radius_km` of a
    /// point. Potentially slow; callers bound it with a timeout.
    async fn nearby_member_count(&self, origin: GeoPoint, radius_km: f64) -> KindredResult<u64>;
}
