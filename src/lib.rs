//! Legend of Xor - a tiny turn-based combat game.
//!
//! Travel until enough movement builds up, fight whatever shows up with sword,
//! magic or bow, grow a stat for every win and start over when you die. The
//! game logic never draws anything; `ui` and `input` render it in a terminal.

pub mod character;
pub mod combat;
pub mod core;
pub mod input;
pub mod simulator;
pub mod travel;
pub mod ui;
pub mod utils;

pub use character::PlayerProgression;
pub use combat::{AttackOutcome, DamageType, MonsterCatalog};
pub use core::{Button, GameConfig, GameState, GameStateMachine, ViewSignal};
pub use utils::persistence::{JsonFileStore, MemoryStore, PersistKey, PersistenceStore};
