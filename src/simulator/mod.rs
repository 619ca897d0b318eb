//! Battle balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of lives through the real state machine to see:
//! - How many fights a player survives before dying
//! - Which monsters end runs most often
//! - How stats grow over a typical life
//!
//! The runner drives `GameStateMachine` with an in-memory store, a sensor
//! that walks at a steady pace and synthetic time, so results match real
//! gameplay.

mod config;
mod report;
mod runner;

pub use config::{AttackPolicy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::{choose_attack, run_simulation, SimError};
