//! # kindred-profiler
//!
//! Turns a 60-item Likert questionnaire into a six-dimension trait vector
//! and a discrete archetype label. Pure functions of their inputs; runs at
//! profile-completion time, never per discovery request.

pub mod archetype;
pub mod items;
pub mod profiler;

pub use archetype::classify;
pub use items::{Item, ITEM_BANK};
pub use profiler::score;
