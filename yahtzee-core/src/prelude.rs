pub use crate::scoring::category::{Category, NUM_CATEGORIES};
pub use crate::scoring::dice::{Face, Roll, DICE_PER_ROLL};
pub use crate::scoring::error::{Error, Result};
pub use crate::scoring::odds::Odds;
pub use crate::scoring::profile::FrequencyProfile;
pub use crate::scoring::rule::{FlatKind, Rule, Score};
pub use crate::scoring::scorer::{Scorecard, Scorer};
