use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("a roll must have exactly 5 dice, got {actual}")]
    DiceCount { actual: usize },
    #[error("die value {0} is outside 1..=6")]
    FaceOutOfRange(u8),
    #[error("'{0}' is not a die face")]
    FaceSymbol(char),
    #[error("'{0}' is not a single die value")]
    DieToken(String),
    #[error("face value rule target {0} is outside 1..=6")]
    RuleFace(u8),
    #[error("a matching set of {0} dice cannot occur in a 5-dice roll")]
    RuleMultiplicity(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
