//! Signals the core sends to whatever is drawing the game.
//!
//! The game logic never touches view types. Each entry point returns the
//! signals it produced, in order, and the front-end reacts to them.

use super::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    /// Player took a hit.
    Short,
    /// An encounter is starting.
    Double,
    /// Player died.
    Long,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewSignal {
    EnterView(GameState),
    ExitView(GameState),
    /// Redraw the monster health bar.
    MonsterHealth { current: i32, max: i32 },
    /// Redraw the player health text.
    PlayerHealth(i32),
    Haptic(HapticPattern),
}

impl ViewSignal {
    pub fn monster_health_percent(current: i32, max: i32) -> u16 {
        if max <= 0 {
            return 0;
        }
        ((current.clamp(0, max) as i64 * 100) / max as i64) as u16
    }
}
