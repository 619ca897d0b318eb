//! Monsters, encounters and attack resolution.

pub mod encounter;
pub mod logic;
pub mod monsters;
pub mod types;

pub use encounter::*;
pub use logic::*;
pub use monsters::*;
pub use types::*;
