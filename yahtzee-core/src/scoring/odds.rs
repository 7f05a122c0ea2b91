use crate::scoring::category::{Category, NUM_CATEGORIES};
use crate::scoring::dice::Roll;
use crate::scoring::scorer::{Scorecard, Scorer};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Tally {
    hits: u64,
    total_score: u64,
}

/// Per-category hit counts and score totals over a set of rolls.
///
/// Accumulators built on separate threads can be combined with
/// [`Odds::merge`], so this works as the state of a parallel fold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Odds {
    rolls: u64,
    tallies: [Tally; NUM_CATEGORIES],
}

impl Odds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score every possible roll once.
    pub fn exhaustive() -> Self {
        Roll::all().iter().fold(Self::new(), |mut odds, roll| {
            odds.record(&Scorer::scorecard_for(roll));
            odds
        })
    }

    pub fn record(&mut self, scorecard: &Scorecard) {
        self.rolls += 1;
        for (category, score) in scorecard.iter() {
            let tally = &mut self.tallies[category.index()];
            tally.hits += u64::from(score > 0);
            tally.total_score += u64::from(score);
        }
    }

    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.rolls += other.rolls;
        for (left, right) in self.tallies.iter_mut().zip(&other.tallies) {
            left.hits += right.hits;
            left.total_score += right.total_score;
        }
        self
    }

    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Number of recorded rolls that scored more than zero in `category`.
    pub fn hits(&self, category: Category) -> u64 {
        self.tallies[category.index()].hits
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self, category: Category) -> f64 {
        if self.rolls == 0 {
            return 0.0;
        }
        self.hits(category) as f64 / self.rolls as f64
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn expected_score(&self, category: Category) -> f64 {
        if self.rolls == 0 {
            return 0.0;
        }
        self.tallies[category.index()].total_score as f64 / self.rolls as f64
    }
}
