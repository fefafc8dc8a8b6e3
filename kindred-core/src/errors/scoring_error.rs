/// Scoring and ranking errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("cancelled after scoring {scored} of {total} candidates")]
    Cancelled { scored: usize, total: usize },

    #[error("invalid weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("ranking failed: {reason}")]
    RankingFailed { reason: String },
}
