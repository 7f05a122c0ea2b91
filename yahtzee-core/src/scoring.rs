pub mod category;
pub mod dice;
pub mod error;
pub mod odds;
pub mod profile;
pub mod rule;
pub mod scorer;
