//! Named default constants backing the config structs.

/// Person-to-person aggregation weights.
pub const DEFAULT_PERSON_SIMILARITY_WEIGHT: f64 = 0.6;
pub const DEFAULT_PERSON_PROXIMITY_WEIGHT: f64 = 0.4;

/// Person-to-group aggregation weights.
pub const DEFAULT_GROUP_SIMILARITY_WEIGHT: f64 = 0.5;
pub const DEFAULT_GROUP_PROXIMITY_WEIGHT: f64 = 0.3;
pub const DEFAULT_GROUP_SIZE_FIT_WEIGHT: f64 = 0.1;
pub const DEFAULT_GROUP_TYPE_FIT_WEIGHT: f64 = 0.1;

/// Conservative floor: candidates scoring below this never surface.
pub const DEFAULT_MIN_SCORE: f64 = 0.1;

/// Default result count when the caller does not specify a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Exponential decay scale for the proximity score (km).
/// Distance equal to the scale decays the score to 1/e ≈ 0.37.
pub const DEFAULT_PROXIMITY_SCALE_KM: f64 = 25.0;

/// Match-reason thresholds.
pub const DEFAULT_NOTABLE_SHARED_INTERESTS: usize = 2;
pub const DEFAULT_NOTABLE_PROXIMITY_SCORE: f64 = 0.5;
pub const DEFAULT_NOTABLE_SIZE_FIT: f64 = 0.7;

/// Cache TTLs (seconds) per category.
pub const DEFAULT_PERSON_MATCHES_TTL_SECS: u64 = 120;
pub const DEFAULT_GROUP_MATCHES_TTL_SECS: u64 = 300;
pub const DEFAULT_NEARBY_COUNT_TTL_SECS: u64 = 60;
pub const DEFAULT_UNREAD_COUNT_TTL_SECS: u64 = 30;

/// Bound on the geospatial nearby-count aggregate (seconds).
pub const DEFAULT_NEARBY_TIMEOUT_SECS: u64 = 5;

/// Default candidate pool cap per discovery query.
pub const DEFAULT_CANDIDATE_POOL_CAP: usize = 500;
