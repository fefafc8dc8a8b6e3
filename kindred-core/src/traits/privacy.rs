use crate::errors::KindredResult;
use crate::models::MemberProfile;

/// Visibility/privacy redaction seam.
///
/// Applied by callers after ranking, never inside the aggregator: scoring
/// must see full data, redaction is a presentation step. Fails with
/// `DiscoveryError::Blocked` when the viewer may not see the profile at all.
pub trait PrivacyFilter: Send + Sync {
    fn redact(&self, profile: &MemberProfile, viewer_id: &str) -> KindredResult<MemberProfile>;
}
