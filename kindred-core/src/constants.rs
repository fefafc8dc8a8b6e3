/// Kindred engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of items in the personality questionnaire.
pub const QUESTIONNAIRE_ITEMS: usize = 60;

/// Items per trait dimension (six dimensions).
pub const ITEMS_PER_DIMENSION: usize = 10;

/// Likert scale bounds for questionnaire responses.
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Scale midpoint used as the fallback for an unanswered dimension.
pub const LIKERT_MIDPOINT: f64 = 3.0;

/// Hard cap on the `limit` parameter of any discovery query.
pub const MAX_RESULT_LIMIT: usize = 50;

/// Hard cap on the candidate pool evaluated per query.
pub const MAX_CANDIDATE_POOL: usize = 1000;

/// Proficiency bounds for member interests.
pub const PROFICIENCY_MIN: u8 = 1;
pub const PROFICIENCY_MAX: u8 = 5;
