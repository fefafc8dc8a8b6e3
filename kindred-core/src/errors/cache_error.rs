/// Result-cache errors.
///
/// A stale or missing entry is never an error; it reads as `None`.
/// Errors are reserved for a failing backing store.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {reason}")]
    BackendUnavailable { reason: String },
}
