//! Static questionnaire item bank.
//!
//! 60 items, 10 per dimension, in blocks following the dimension
//! declaration order. Three items per block are reverse-keyed to catch
//! straight-line responding.

use kindred_core::models::TraitDimension;

/// One questionnaire item: which dimension it loads on and whether the
/// response is reverse-scored (effective value `6 - response`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u8,
    pub dimension: TraitDimension,
    pub reversed: bool,
}

const fn item(id: u8, dimension: TraitDimension, reversed: bool) -> Item {
    Item {
        id,
        dimension,
        reversed,
    }
}

use TraitDimension::*;

pub const ITEM_BANK: [Item; 60] = [
    // Openness: 1–10
    item(1, Openness, false),
    item(2, Openness, false),
    item(3, Openness, true),
    item(4, Openness, false),
    item(5, Openness, false),
    item(6, Openness, true),
    item(7, Openness, false),
    item(8, Openness, false),
    item(9, Openness, true),
    item(10, Openness, false),
    // Conscientiousness: 11–20
    item(11, Conscientiousness, false),
    item(12, Conscientiousness, false),
    item(13, Conscientiousness, true),
    item(14, Conscientiousness, false),
    item(15, Conscientiousness, false),
    item(16, Conscientiousness, true),
    item(17, Conscientiousness, false),
    item(18, Conscientiousness, false),
    item(19, Conscientiousness, true),
    item(20, Conscientiousness, false),
    // Extraversion: 21–30
    item(21, Extraversion, false),
    item(22, Extraversion, false),
    item(23, Extraversion, true),
    item(24, Extraversion, false),
    item(25, Extraversion, false),
    item(26, Extraversion, true),
    item(27, Extraversion, false),
    item(28, Extraversion, false),
    item(29, Extraversion, true),
    item(30, Extraversion, false),
    // Agreeableness: 31–40
    item(31, Agreeableness, false),
    item(32, Agreeableness, false),
    item(33, Agreeableness, true),
    item(34, Agreeableness, false),
    item(35, Agreeableness, false),
    item(36, Agreeableness, true),
    item(37, Agreeableness, false),
    item(38, Agreeableness, false),
    item(39, Agreeableness, true),
    item(40, Agreeableness, false),
    // Resilience: 41–50
    item(41, Resilience, false),
    item(42, Resilience, false),
    item(43, Resilience, true),
    item(44, Resilience, false),
    item(45, Resilience, false),
    item(46, Resilience, true),
    item(47, Resilience, false),
    item(48, Resilience, false),
    item(49, Resilience, true),
    item(50, Resilience, false),
    // Spirituality: 51–60
    item(51, Spirituality, false),
    item(52, Spirituality, false),
    item(53, Spirituality, true),
    item(54, Spirituality, false),
    item(55, Spirituality, false),
    item(56, Spirituality, true),
    item(57, Spirituality, false),
    item(58, Spirituality, false),
    item(59, Spirituality, true),
    item(60, Spirituality, false),
];
