pub mod geo;
pub mod group;
pub mod interest;
pub mod member;
pub mod proficiency;
pub mod result;
pub mod trait_vector;

pub use geo::GeoPoint;
pub use group::{Group, GroupType};
pub use interest::Interest;
pub use member::{InterestRating, Member, MemberProfile, ResolvedInterest};
pub use proficiency::Proficiency;
pub use result::{CompatibilityResult, SubScores, TargetKind};
pub use trait_vector::{Archetype, TraitDimension, TraitVector};
