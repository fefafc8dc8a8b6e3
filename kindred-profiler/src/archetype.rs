//! Archetype classification from a trait vector.

use kindred_core::models::{Archetype, TraitDimension, TraitVector};

/// Classify a vector by its top two dimensions.
///
/// The ranking is a stable descending sort, so a tie between the 2nd and
/// 3rd dimension resolves to the earlier-declared dimension. The two codes
/// are ordered alphabetically to form the canonical pair, which maps into
/// the closed archetype set; `Explorer` is the explicit default arm.
pub fn classify(vector: &TraitVector) -> Archetype {
    let ranked = vector.ranked();
    from_pair(ranked[0], ranked[1])
}

fn from_pair(first: TraitDimension, second: TraitDimension) -> Archetype {
    let (a, b) = if first.code() <= second.code() {
        (first, second)
    } else {
        (second, first)
    };

    use TraitDimension::*;
    match (a, b) {
        (Agreeableness, Conscientiousness) => Archetype::Steward,
        (Agreeableness, Extraversion) => Archetype::Encourager,
        (Agreeableness, Openness) => Archetype::Bridgebuilder,
        (Agreeableness, Resilience) => Archetype::Peacemaker,
        (Agreeableness, Spirituality) => Archetype::Shepherd,
        (Conscientiousness, Extraversion) => Archetype::Organizer,
        (Conscientiousness, Openness) => Archetype::Architect,
        (Conscientiousness, Resilience) => Archetype::Anchor,
        (Conscientiousness, Spirituality) => Archetype::Keeper,
        (Extraversion, Openness) => Archetype::Trailblazer,
        (Extraversion, Resilience) => Archetype::Spark,
        (Extraversion, Spirituality) => Archetype::Gatherer,
        (Openness, Resilience) => Archetype::Voyager,
        (Openness, Spirituality) => Archetype::Seeker,
        (Resilience, Spirituality) => Archetype::Pilgrim,
        // Same dimension twice cannot happen from a ranked vector; any
        // unexpected pairing falls through to the default label.
        _ => Archetype::Explorer,
    }
}
