use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{PROFICIENCY_MAX, PROFICIENCY_MIN};

/// Interest proficiency clamped to [1, 5].
/// 1 = curious newcomer, 5 = could mentor others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Proficiency(u8);

impl Proficiency {
    /// Create a new Proficiency, clamping to [1, 5].
    pub fn new(value: u8) -> Self {
        Self(value.clamp(PROFICIENCY_MIN, PROFICIENCY_MAX))
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Proficiency {
    fn default() -> Self {
        Self(PROFICIENCY_MIN)
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Proficiency {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Proficiency> for u8 {
    fn from(p: Proficiency) -> Self {
        p.0
    }
}
