/// Discovery façade errors.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("requester {member_id} not found")]
    RequesterNotFound { member_id: String },

    #[error("viewer {viewer_id} is blocked from profile {profile_id}")]
    Blocked {
        viewer_id: String,
        profile_id: String,
    },
}
