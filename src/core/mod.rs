//! Core game state and the state machine driving it.

pub mod constants;
pub mod events;
pub mod game_state;
pub mod state_machine;
pub mod timer;

pub use constants::*;
pub use events::*;
pub use game_state::*;
pub use state_machine::*;
