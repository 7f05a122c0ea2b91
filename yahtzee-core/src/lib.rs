pub mod prelude;
pub mod scoring;
