use serde::{Deserialize, Serialize};
use std::fmt;

/// The six personality dimensions measured by the questionnaire.
///
/// Declaration order is the documented tie-break order when two dimensions
/// carry equal scores: earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitDimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Resilience,
    Spirituality,
}

impl TraitDimension {
    pub const ALL: [TraitDimension; 6] = [
        TraitDimension::Openness,
        TraitDimension::Conscientiousness,
        TraitDimension::Extraversion,
        TraitDimension::Agreeableness,
        TraitDimension::Resilience,
        TraitDimension::Spirituality,
    ];

    /// One-letter code used to form archetype keys.
    pub fn code(self) -> char {
        match self {
            TraitDimension::Openness => 'O',
            TraitDimension::Conscientiousness => 'C',
            TraitDimension::Extraversion => 'E',
            TraitDimension::Agreeableness => 'A',
            TraitDimension::Resilience => 'R',
            TraitDimension::Spirituality => 'S',
        }
    }
}

impl fmt::Display for TraitDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraitDimension::Openness => "openness",
            TraitDimension::Conscientiousness => "conscientiousness",
            TraitDimension::Extraversion => "extraversion",
            TraitDimension::Agreeableness => "agreeableness",
            TraitDimension::Resilience => "resilience",
            TraitDimension::Spirituality => "spirituality",
        };
        write!(f, "{name}")
    }
}

/// Six-dimension personality score. Each dimension is the mean of its
/// questionnaire items on the 1–5 Likert scale, rounded to one decimal.
/// Only produced from a complete 60-item response set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitVector {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub resilience: f64,
    pub spirituality: f64,
}

impl TraitVector {
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Openness => self.openness,
            TraitDimension::Conscientiousness => self.conscientiousness,
            TraitDimension::Extraversion => self.extraversion,
            TraitDimension::Agreeableness => self.agreeableness,
            TraitDimension::Resilience => self.resilience,
            TraitDimension::Spirituality => self.spirituality,
        }
    }

    /// Dimensions sorted descending by score. The sort is stable, so equal
    /// scores fall back to declaration order.
    pub fn ranked(&self) -> [TraitDimension; 6] {
        let mut dims = TraitDimension::ALL;
        dims.sort_by(|a, b| {
            self.get(*b)
                .partial_cmp(&self.get(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        dims
    }
}

/// Discrete personality label assigned from the top two trait dimensions.
///
/// Keyed by the alphabetically-sorted pair of dimension codes. A closed set:
/// every two-dimension pair maps to exactly one variant, and `Explorer` is
/// the explicit default arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// A + C
    Steward,
    /// A + E
    Encourager,
    /// A + O
    Bridgebuilder,
    /// A + R
    Peacemaker,
    /// A + S
    Shepherd,
    /// C + E
    Organizer,
    /// C + O
    Architect,
    /// C + R
    Anchor,
    /// C + S
    Keeper,
    /// E + O
    Trailblazer,
    /// E + R
    Spark,
    /// E + S
    Gatherer,
    /// O + R
    Voyager,
    /// O + S
    Seeker,
    /// R + S
    Pilgrim,
    /// Default label for any pairing outside the table.
    Explorer,
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Archetype::Steward => "Steward",
            Archetype::Encourager => "Encourager",
            Archetype::Bridgebuilder => "Bridgebuilder",
            Archetype::Peacemaker => "Peacemaker",
            Archetype::Shepherd => "Shepherd",
            Archetype::Organizer => "Organizer",
            Archetype::Architect => "Architect",
            Archetype::Anchor => "Anchor",
            Archetype::Keeper => "Keeper",
            Archetype::Trailblazer => "Trailblazer",
            Archetype::Spark => "Spark",
            Archetype::Gatherer => "Gatherer",
            Archetype::Voyager => "Voyager",
            Archetype::Seeker => "Seeker",
            Archetype::Pilgrim => "Pilgrim",
            Archetype::Explorer => "Explorer",
        };
        write!(f, "{name}")
    }
}
