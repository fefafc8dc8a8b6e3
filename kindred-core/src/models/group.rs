use serde::{Deserialize, Serialize};
use std::fmt;

use super::geo::GeoPoint;

/// The kind of gathering a group is. Closed set; member type preferences
/// reference these same variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    Study,
    Prayer,
    Service,
    Social,
    Hobby,
    Support,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupType::Study => "study",
            GroupType::Prayer => "prayer",
            GroupType::Service => "service",
            GroupType::Social => "social",
            GroupType::Hobby => "hobby",
            GroupType::Support => "support",
        };
        write!(f, "{name}")
    }
}

/// A group in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub group_type: GroupType,
    /// Minimum viable member count.
    pub min_size: u32,
    /// Capacity; a group at `current_size == max_size` is full.
    pub max_size: u32,
    pub current_size: u32,
    /// Meeting point. Virtual groups have none.
    pub location: Option<GeoPoint>,
    pub tags: Vec<String>,
}

impl Group {
    pub fn is_full(&self) -> bool {
        self.current_size >= self.max_size
    }

    /// A group is malformed if its size bounds cannot hold anyone.
    pub fn has_valid_bounds(&self) -> bool {
        self.max_size > 0 && self.min_size <= self.max_size
    }
}
