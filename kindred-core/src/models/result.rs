use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a compatibility result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Person,
    Group,
}

/// Per-signal sub-scores, each in [0.0, 1.0].
///
/// `None` means the signal was unavailable for this pair (e.g. an unlocated
/// member has no proximity signal) and is excluded from the weighted sum
/// rather than counted as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub similarity: Option<f64>,
    pub proximity: Option<f64>,
    pub size_fit: Option<f64>,
    pub type_fit: Option<f64>,
}

impl SubScores {
    /// Signals present, as (weightable value, label) pairs; used by tests
    /// and debug logging.
    pub fn available(&self) -> Vec<(&'static str, f64)> {
        let mut out = Vec::new();
        if let Some(s) = self.similarity {
            out.push(("similarity", s));
        }
        if let Some(s) = self.proximity {
            out.push(("proximity", s));
        }
        if let Some(s) = self.size_fit {
            out.push(("size_fit", s));
        }
        if let Some(s) = self.type_fit {
            out.push(("type_fit", s));
        }
        out
    }
}

/// One ranked discovery result. Transient: never persisted beyond the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub target_id: String,
    pub target_kind: TargetKind,
    pub scores: SubScores,
    /// Weighted combination of the available sub-scores, in [0.0, 1.0].
    pub overall: f64,
    /// Short human-readable match reasons, ordered most notable first.
    /// Presentation metadata only; never feeds back into scoring.
    pub reasons: Vec<String>,
    pub computed_at: DateTime<Utc>,
}
