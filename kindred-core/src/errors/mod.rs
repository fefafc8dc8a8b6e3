pub mod cache_error;
pub mod discovery_error;
pub mod repository_error;
pub mod scoring_error;

pub use cache_error::CacheError;
pub use discovery_error::DiscoveryError;
pub use repository_error::RepositoryError;
pub use scoring_error::ScoringError;

/// Umbrella error for the Kindred engine.
#[derive(Debug, thiserror::Error)]
pub enum KindredError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type KindredResult<T> = Result<T, KindredError>;

impl KindredError {
    /// Whether the failure came from an unavailable upstream collaborator.
    /// Callers render these as retryable, distinct from an empty result set.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            KindredError::Repository(RepositoryError::Unavailable { .. })
                | KindredError::Cache(CacheError::BackendUnavailable { .. })
        )
    }
}
