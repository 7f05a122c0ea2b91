use crate::scoring::dice::{Face, Roll, DICE_PER_ROLL};
use crate::scoring::error::{Error, Result};
use crate::scoring::profile::FrequencyProfile;

pub type Score = u32;

/// Rules that award a fixed number of points when their pattern is present.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum FlatKind {
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
}

impl FlatKind {
    fn qualifies(self, profile: &FrequencyProfile) -> bool {
        match self {
            Self::FullHouse => profile.sorted_counts().as_slice() == [2, 3],
            Self::SmallStraight => profile.longest_run() >= 4,
            Self::LargeStraight => {
                profile.distinct_faces() == DICE_PER_ROLL
                    && (!profile.contains(Face::One) || !profile.contains(Face::Six))
            }
            Self::Yahtzee => {
                let single_face = profile.distinct_faces() == 1;
                debug_assert!(!single_face || profile.max_count() as usize == DICE_PER_ROLL);
                single_face
            }
        }
    }
}

/// A scoring policy with its configuration baked in.
///
/// Prefer the checked constructors over building variants by hand: they
/// reject configurations that could never describe a real category.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Rule {
    /// `face` times the number of dice showing it.
    FaceValueSum { face: Face },
    /// Sum of all dice when some face appears at least `min_count` times.
    /// A `min_count` of zero always qualifies.
    MatchingSetSum { min_count: u8 },
    /// `score` when the pattern named by `kind` is present.
    FlatScore { kind: FlatKind, score: Score },
}

impl Rule {
    pub fn face_value_sum(value: u8) -> Result<Self> {
        let face = Face::try_from(value).map_err(|_| Error::RuleFace(value))?;
        Ok(Self::FaceValueSum { face })
    }

    pub fn matching_set_sum(min_count: u8) -> Result<Self> {
        if usize::from(min_count) > DICE_PER_ROLL {
            return Err(Error::RuleMultiplicity(min_count));
        }
        Ok(Self::MatchingSetSum { min_count })
    }

    pub const fn flat(kind: FlatKind, score: Score) -> Self {
        Self::FlatScore { kind, score }
    }

    fn evaluate_face_value_sum(face: Face, roll: &Roll) -> Score {
        Score::from(face.value()) * Score::from(roll.count(face))
    }

    fn evaluate_matching_set_sum(min_count: u8, roll: &Roll) -> Score {
        if min_count == 0 || roll.profile().max_count() >= min_count {
            roll.sum()
        } else {
            0
        }
    }

    fn evaluate_flat_score(kind: FlatKind, score: Score, roll: &Roll) -> Score {
        if kind.qualifies(&roll.profile()) {
            score
        } else {
            0
        }
    }

    pub fn evaluate(&self, roll: &Roll) -> Score {
        match *self {
            Self::FaceValueSum { face } => Self::evaluate_face_value_sum(face, roll),
            Self::MatchingSetSum { min_count } => Self::evaluate_matching_set_sum(min_count, roll),
            Self::FlatScore { kind, score } => Self::evaluate_flat_score(kind, score, roll),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::roll;

    const FULL_HOUSE: Rule = Rule::flat(FlatKind::FullHouse, 25);
    const SMALL_STRAIGHT: Rule = Rule::flat(FlatKind::SmallStraight, 30);
    const LARGE_STRAIGHT: Rule = Rule::flat(FlatKind::LargeStraight, 40);
    const YAHTZEE: Rule = Rule::flat(FlatKind::Yahtzee, 50);

    fn expect(rule: Rule, roll: Roll, expected: Score) {
        assert_eq!(rule.evaluate(&roll), expected, "{rule:?} on {roll}");
    }

    #[test]
    fn construction_test() {
        assert_eq!(
            Rule::face_value_sum(3),
            Ok(Rule::FaceValueSum { face: Face::Three })
        );
        assert_eq!(Rule::face_value_sum(0), Err(Error::RuleFace(0)));
        assert_eq!(Rule::face_value_sum(7), Err(Error::RuleFace(7)));
        assert_eq!(
            Rule::matching_set_sum(0),
            Ok(Rule::MatchingSetSum { min_count: 0 })
        );
        assert!(Rule::matching_set_sum(5).is_ok());
        assert_eq!(Rule::matching_set_sum(6), Err(Error::RuleMultiplicity(6)));
    }

    #[test]
    fn face_value_sum_test() {
        let fours = Rule::face_value_sum(4).unwrap();
        expect(fours, roll!("4 4 1 4 2"), 12);
        expect(fours, roll!("1 2 3 5 6"), 0);
        expect(Rule::face_value_sum(6).unwrap(), roll!("6 6 6 6 6"), 30);
        expect(Rule::face_value_sum(1).unwrap(), roll!("1 2 3 4 5"), 1);
    }

    #[test]
    fn face_value_sum_order_independent_test() {
        for dice in [[4, 4, 1, 4, 2], [1, 2, 3, 4, 5], [6, 6, 2, 2, 6]] {
            for value in 1..=6 {
                let rule = Rule::face_value_sum(value).unwrap();
                let expected = rule.evaluate(&Roll::from_slice(&dice).unwrap());
                for permutation in dice.iter().copied().permutations(5) {
                    let roll = Roll::from_slice(&permutation).unwrap();
                    assert_eq!(rule.evaluate(&roll), expected);
                }
            }
        }
    }

    #[test]
    fn matching_set_sum_test() {
        let three_of_a_kind = Rule::matching_set_sum(3).unwrap();
        expect(three_of_a_kind, roll!("3 3 3 2 2"), 13);
        expect(three_of_a_kind, roll!("3 3 2 2 1"), 0);
        expect(three_of_a_kind, roll!("5 5 5 5 1"), 21);

        let four_of_a_kind = Rule::matching_set_sum(4).unwrap();
        expect(four_of_a_kind, roll!("5 5 5 5 1"), 21);
        expect(four_of_a_kind, roll!("2 2 2 2 2"), 10);
        expect(four_of_a_kind, roll!("3 3 3 2 2"), 0);

        let chance = Rule::matching_set_sum(0).unwrap();
        expect(chance, roll!("2 3 3 4 6"), 18);
        expect(chance, roll!("1 1 1 1 1"), 5);
    }

    #[test]
    fn full_house_test() {
        expect(FULL_HOUSE, roll!("3 3 3 2 2"), 25);
        expect(FULL_HOUSE, roll!("2 6 2 6 6"), 25);
        expect(FULL_HOUSE, roll!("5 5 5 5 5"), 0);
        expect(FULL_HOUSE, roll!("5 5 5 5 2"), 0);
        expect(FULL_HOUSE, roll!("1 1 2 2 3"), 0);
    }

    #[test]
    fn small_straight_test() {
        expect(SMALL_STRAIGHT, roll!("1 2 3 4 6"), 30);
        expect(SMALL_STRAIGHT, roll!("1 2 3 4 4"), 30);
        expect(SMALL_STRAIGHT, roll!("6 4 5 3 3"), 30);
        expect(SMALL_STRAIGHT, roll!("1 2 3 4 5"), 30);
        expect(SMALL_STRAIGHT, roll!("1 2 3 5 6"), 0);
        expect(SMALL_STRAIGHT, roll!("1 1 2 3 5"), 0);
    }

    #[test]
    fn large_straight_test() {
        expect(LARGE_STRAIGHT, roll!("1 2 3 4 5"), 40);
        expect(LARGE_STRAIGHT, roll!("2 3 4 5 6"), 40);
        expect(LARGE_STRAIGHT, roll!("5 3 6 2 4"), 40);
        expect(LARGE_STRAIGHT, roll!("1 2 3 4 6"), 0);
        expect(LARGE_STRAIGHT, roll!("1 2 3 4 4"), 0);
    }

    #[test]
    fn yahtzee_test() {
        expect(YAHTZEE, roll!("4 4 4 4 4"), 50);
        expect(YAHTZEE, roll!("4 4 4 4 3"), 0);
        expect(YAHTZEE, roll!("1 1 1 1 1"), 50);
    }

    #[test]
    fn exhaustive_bounds_test() {
        let flat_rules = [FULL_HOUSE, SMALL_STRAIGHT, LARGE_STRAIGHT, YAHTZEE];
        let chance = Rule::matching_set_sum(0).unwrap();

        for roll in Roll::all() {
            for rule in flat_rules {
                let Rule::FlatScore { score, .. } = rule else {
                    unreachable!()
                };
                let result = rule.evaluate(roll);
                assert!(result == 0 || result == score, "{rule:?} on {roll}");
            }
            for value in 1..=6 {
                let result = Rule::face_value_sum(value).unwrap().evaluate(roll);
                assert_eq!(result % Score::from(value), 0);
                assert!(result <= 5 * Score::from(value));
            }
            assert_eq!(chance.evaluate(roll), roll.sum());
        }
    }
}
