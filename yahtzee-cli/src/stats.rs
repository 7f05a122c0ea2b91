use std::time::Instant;

use anyhow::Result;
use clap::Subcommand;
use itertools::Itertools;
use rayon::prelude::*;
use strum::IntoEnumIterator;
use tracing::info;

use yahtzee_core::prelude::{Category, Odds, Roll, Scorer};

#[derive(Debug, Subcommand)]
pub enum CliCommands {
    /// Hit rate and expected score of each category over every possible roll
    Odds {
        /// Run on a single thread (for profiling)
        #[arg(long = "single-threaded", default_value = "false")]
        single_threaded: bool,

        /// Order categories by expected score instead of scorecard order
        #[arg(long = "by-expected", default_value = "false")]
        by_expected: bool,
    },
}

fn generate_odds(single_threaded: bool) -> Odds {
    if single_threaded {
        Odds::exhaustive()
    } else {
        Roll::all()
            .par_iter()
            .fold(Odds::new, |mut odds, roll| {
                odds.record(&Scorer::scorecard_for(roll));
                odds
            })
            .reduce(Odds::new, |left, right| left.merge(&right))
    }
}

fn print_odds(odds: &Odds, by_expected: bool) {
    let category_columns = Category::iter()
        .map(|c| c.to_string().len())
        .max()
        .unwrap_or(0);

    let categories = Category::iter().sorted_by(|a, b| {
        if by_expected {
            odds.expected_score(*b).total_cmp(&odds.expected_score(*a))
        } else {
            a.cmp(b)
        }
    });

    for category in categories {
        println!(
            " - {:category_width$} {:>7.3}% (ev: {:>6.2})",
            category.to_string(),
            odds.hit_rate(category) * 100.0,
            odds.expected_score(category),
            category_width = category_columns
        );
    }
}

#[allow(clippy::unnecessary_wraps)]
fn odds_stats(single_threaded: bool, by_expected: bool) -> Result<()> {
    let started = Instant::now();
    let odds = generate_odds(single_threaded);
    info!(
        rolls = odds.rolls(),
        elapsed_ms = started.elapsed().as_millis(),
        "scored every roll"
    );

    println!(
        "Over all {} rolls of five dice, each category scores with these odds:",
        odds.rolls()
    );
    print_odds(&odds, by_expected);

    Ok(())
}

pub fn run(command: &CliCommands) -> Result<()> {
    match command {
        CliCommands::Odds {
            single_threaded,
            by_expected,
        } => odds_stats(*single_threaded, *by_expected),
    }
}
