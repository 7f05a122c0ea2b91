use std::ops::Index;

use strum::IntoEnumIterator;

use crate::scoring::category::{Category, NUM_CATEGORIES};
use crate::scoring::dice::Roll;
use crate::scoring::rule::Score;

/// What a single roll would earn in every category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scorecard {
    roll: Roll,
    scores: [Score; NUM_CATEGORIES],
}

impl Scorecard {
    pub fn roll(&self) -> &Roll {
        &self.roll
    }

    pub fn get(&self, category: Category) -> Score {
        self.scores[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::iter().map(|category| (category, self.get(category)))
    }

    /// Sum of ones through sixes. The upper bonus depends on a whole game
    /// and is not included.
    pub fn upper_total(&self) -> Score {
        self.iter()
            .filter(|(category, _)| category.is_upper())
            .map(|(_, score)| score)
            .sum()
    }
}

impl Index<Category> for Scorecard {
    type Output = Score;

    fn index(&self, category: Category) -> &Score {
        &self.scores[category.index()]
    }
}

pub struct Scorer<'a> {
    roll: &'a Roll,
}

impl<'a> Scorer<'a> {
    fn new(roll: &'a Roll) -> Self {
        Self { roll }
    }

    fn score(&self, category: Category) -> Score {
        category.rule().evaluate(self.roll)
    }

    fn scorecard(&self) -> Scorecard {
        let mut scores = [0; NUM_CATEGORIES];
        for category in Category::iter() {
            scores[category.index()] = self.score(category);
        }
        tracing::trace!(roll = %self.roll, ?scores, "scored roll");
        Scorecard {
            roll: *self.roll,
            scores,
        }
    }

    pub fn score_roll(category: Category, roll: &'a Roll) -> Score {
        let scorer = Self::new(roll);
        scorer.score(category)
    }

    pub fn scorecard_for(roll: &'a Roll) -> Scorecard {
        let scorer = Self::new(roll);
        scorer.scorecard()
    }
}
