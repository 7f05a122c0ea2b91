use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use crate::scoring::{
    error::{Error, Result},
    profile::FrequencyProfile,
    rule::Score,
};

pub const DICE_PER_ROLL: usize = 5;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumCount, EnumIter)]
#[repr(u8)]
pub enum Face {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Face {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The face showing one more pip, or `None` for `Six`.
    pub fn next(self) -> Option<Self> {
        Self::try_from(self.value() + 1).ok()
    }
}

impl TryFrom<u8> for Face {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            _ => Err(Error::FaceOutOfRange(value)),
        }
    }
}

impl TryFrom<char> for Face {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        let digit = symbol
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .ok_or(Error::FaceSymbol(symbol))?;
        Self::try_from(digit)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Five rolled dice. Every rule only looks at the multiset of faces, so the
/// order dice were given in is kept but never matters for scoring.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Roll {
    dice: [Face; DICE_PER_ROLL],
}

lazy_static! {
    static ref ALL_ROLLS: Vec<Roll> = (0..DICE_PER_ROLL)
        .map(|_| Face::iter())
        .multi_cartesian_product()
        .filter_map(|faces| <[Face; DICE_PER_ROLL]>::try_from(faces).ok())
        .map(Roll::new)
        .collect();
}

fn reject(err: Error) -> Error {
    tracing::debug!(%err, "rejected roll");
    err
}

impl Roll {
    pub fn new(dice: [Face; DICE_PER_ROLL]) -> Self {
        Self { dice }
    }

    /// Build a roll from raw die values, rejecting anything that is not
    /// exactly five values in `1..=6`.
    ///
    /// ```
    /// # use yahtzee_core::prelude::{Error, Roll};
    /// assert!(Roll::from_slice(&[1, 2, 3, 4, 5]).is_ok());
    /// assert_eq!(Roll::from_slice(&[1, 2, 3]), Err(Error::DiceCount { actual: 3 }));
    /// assert_eq!(Roll::from_slice(&[1, 2, 3, 4, 7]), Err(Error::FaceOutOfRange(7)));
    /// ```
    pub fn from_slice(values: &[u8]) -> Result<Self> {
        let values: [u8; DICE_PER_ROLL] = values.try_into().map_err(|_| {
            reject(Error::DiceCount {
                actual: values.len(),
            })
        })?;

        let mut dice = [Face::One; DICE_PER_ROLL];
        for (die, value) in dice.iter_mut().zip(values) {
            *die = Face::try_from(value).map_err(reject)?;
        }

        Ok(Self { dice })
    }

    /// Every ordered roll of five dice, `6^5` in total.
    pub fn all() -> &'static [Self] {
        &ALL_ROLLS
    }

    pub fn faces(&self) -> &[Face] {
        &self.dice
    }

    pub fn sum(&self) -> Score {
        self.dice.iter().map(|die| Score::from(die.value())).sum()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn count(&self, face: Face) -> u8 {
        self.dice.iter().filter(|&&die| die == face).count() as u8
    }

    pub fn profile(&self) -> FrequencyProfile {
        FrequencyProfile::from(self)
    }

}

impl FromStr for Roll {
    type Err = Error;

    /// Parse a roll such as `"3 3 3 2 2"`, `"3,3,3,2,2"` or the compact
    /// `"33322"`. Separated dice must be one digit each; the compact form is
    /// only accepted as a single token.
    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let faces = match tokens.as_slice() {
            [compact] => compact.chars().map(Face::try_from).collect::<Result<Vec<_>>>(),
            _ => tokens
                .iter()
                .map(|token| match token.chars().exactly_one() {
                    Ok(symbol) => Face::try_from(symbol),
                    Err(_) => Err(Error::DieToken((*token).to_owned())),
                })
                .collect::<Result<Vec<_>>>(),
        }
        .map_err(reject)?;

        let actual = faces.len();
        let dice = faces
            .try_into()
            .map_err(|_| reject(Error::DiceCount { actual }))?;

        Ok(Self { dice })
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dice.iter().join(" "))
    }
}

/// Parse a roll literal. Panics if the input is malformed. This exists only
/// for test-writing.
///
/// ```
/// # use yahtzee_core::roll;
/// assert_eq!(roll!("6 6 1 2 6").sum(), 21);
/// ```
#[macro_export]
macro_rules! roll {
    ($dice:literal) => {
        $dice
            .parse::<$crate::scoring::dice::Roll>()
            .unwrap()
    };
}
