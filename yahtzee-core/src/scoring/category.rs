use static_assertions::const_assert;
use strum::EnumCount;
use strum_macros::{Display, EnumIter, EnumString};

use crate::scoring::dice::Face;
use crate::scoring::rule::{FlatKind, Rule, Score};

pub const FULL_HOUSE_SCORE: Score = 25;
pub const SMALL_STRAIGHT_SCORE: Score = 30;
pub const LARGE_STRAIGHT_SCORE: Score = 40;
pub const YAHTZEE_SCORE: Score = 50;

pub const NUM_CATEGORIES: usize = 13;

/// Scorecard categories, in scorecard order.
#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    EnumIter,
    strum_macros::EnumCount,
    Display,
    EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Category {
    Ones = 0,
    Twos = 1,
    Threes = 2,
    Fours = 3,
    Fives = 4,
    Sixes = 5,
    ThreeOfAKind = 6,
    FourOfAKind = 7,
    FullHouse = 8,
    SmallStraight = 9,
    LargeStraight = 10,
    Yahtzee = 11,
    Chance = 12,
}

const_assert!(Category::COUNT == NUM_CATEGORIES);
const_assert!(
    FULL_HOUSE_SCORE < SMALL_STRAIGHT_SCORE
        && SMALL_STRAIGHT_SCORE < LARGE_STRAIGHT_SCORE
        && LARGE_STRAIGHT_SCORE < YAHTZEE_SCORE
);

#[rustfmt::skip]
static RULES: [Rule; NUM_CATEGORIES] = [
    Rule::FaceValueSum { face: Face::One },
    Rule::FaceValueSum { face: Face::Two },
    Rule::FaceValueSum { face: Face::Three },
    Rule::FaceValueSum { face: Face::Four },
    Rule::FaceValueSum { face: Face::Five },
    Rule::FaceValueSum { face: Face::Six },
    Rule::MatchingSetSum { min_count: 3 },
    Rule::MatchingSetSum { min_count: 4 },
    Rule::flat(FlatKind::FullHouse,     FULL_HOUSE_SCORE),
    Rule::flat(FlatKind::SmallStraight, SMALL_STRAIGHT_SCORE),
    Rule::flat(FlatKind::LargeStraight, LARGE_STRAIGHT_SCORE),
    Rule::flat(FlatKind::Yahtzee,       YAHTZEE_SCORE),
    Rule::MatchingSetSum { min_count: 0 },
];

impl Category {
    pub fn index(self) -> usize {
        self as usize
    }

    /// The rule this category is scored with.
    pub fn rule(self) -> &'static Rule {
        &RULES[self.index()]
    }

    /// Ones through sixes.
    pub fn is_upper(self) -> bool {
        self <= Self::Sixes
    }
}
