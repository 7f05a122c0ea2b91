use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use strum::IntoEnumIterator;
use tracing::info;

use yahtzee_core::prelude::{Category, Roll, Scorecard, Scorer};

#[derive(Debug, ClapArgs)]
pub struct Args {
    /// The five dice, e.g. `3 3 3 2 2` or `33322`
    #[arg(required = true, num_args = 1..)]
    dice: Vec<String>,

    /// Only print the score for this category, e.g. `full-house`
    #[arg(short = 'c', long = "category")]
    category: Option<Category>,
}

fn category_width() -> usize {
    Category::iter()
        .map(|category| category.to_string().len())
        .max()
        .unwrap_or(0)
}

fn scorecard_lines(card: &Scorecard) -> Vec<String> {
    let width = category_width();
    let mut lines = vec![format!("Scores for {}:", card.roll())];
    for (category, score) in card.iter() {
        lines.push(format!(" - {:width$} {score:>3}", category.to_string()));
        if category == Category::Sixes {
            lines.push(format!(
                "   {:width$} {:>3}",
                "(upper total)",
                card.upper_total()
            ));
        }
    }
    lines
}

pub fn run(args: &Args) -> Result<()> {
    let input = args.dice.join(" ");
    let roll: Roll = input
        .parse()
        .with_context(|| format!("invalid roll `{input}`"))?;

    info!(%roll, category = ?args.category, "scoring roll");

    match args.category {
        Some(category) => println!("{category}: {}", Scorer::score_roll(category, &roll)),
        None => {
            for line in scorecard_lines(&Scorer::scorecard_for(&roll)) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use yahtzee_core::roll;

    use super::*;

    #[test]
    fn render_test() {
        let lines = scorecard_lines(&Scorer::scorecard_for(&roll!("3 3 3 2 2")));
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "Scores for 3 3 3 2 2:");
        assert_eq!(lines[1], " - ones              0");
        assert_eq!(lines[7], "   (upper total)    13");
        assert_eq!(lines[10], " - full-house       25");
    }

    #[test]
    fn rejects_multi_digit_die_test() {
        let args = Args {
            dice: ["12", "3", "4", "5"].map(str::to_owned).to_vec(),
            category: None,
        };
        assert!(run(&args).is_err());

        let args = Args {
            dice: vec!["33322".to_owned()],
            category: Some(Category::FullHouse),
        };
        assert!(run(&args).is_ok());
    }
}
