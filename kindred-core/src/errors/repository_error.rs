/// Errors from the repository collaborator.
///
/// `Unavailable` is a real backend outage and must surface to the caller;
/// substituting empty results would hide data-loss symptoms.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("query failed: {reason}")]
    QueryFailed { reason: String },
}
