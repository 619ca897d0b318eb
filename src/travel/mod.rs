//! Movement sampling during travel.

pub mod movement;
pub mod sensor;

pub use movement::*;
pub use sensor::*;
