//! Player stats and their persistence.

pub mod progression;

pub use progression::*;
