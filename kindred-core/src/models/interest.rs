use serde::{Deserialize, Serialize};

/// An interest from the canonical catalog. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,
    /// Canonical display name, e.g. "Woodworking".
    pub name: String,
    /// Display category, e.g. "Crafts & Making".
    pub category: String,
}
