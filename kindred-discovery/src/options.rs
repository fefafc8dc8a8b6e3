use kindred_core::cancel::CancelToken;

/// Caller-supplied query parameters. Absent values fall back to the
/// scoring config's defaults; the limit is always clamped to the hard cap.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub limit: Option<usize>,
    pub min_score: Option<f64>,
    pub cancel: CancelToken,
}

impl QueryOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}
