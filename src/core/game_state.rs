use super::constants::{STATE_TAG_BATTLE, STATE_TAG_DEATH, STATE_TAG_TRAVEL, STATE_TAG_WELCOME};
use crate::character::progression::PlayerProgression;
use crate::combat::encounter::EncounterState;

/// Top-level screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Welcome,
    Travel,
    Battle,
    Death,
}

impl GameState {
    /// Integer written to the `game_state` key.
    pub fn tag(&self) -> i32 {
        match self {
            GameState::Battle => STATE_TAG_BATTLE,
            GameState::Travel => STATE_TAG_TRAVEL,
            GameState::Welcome => STATE_TAG_WELCOME,
            GameState::Death => STATE_TAG_DEATH,
        }
    }

    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            STATE_TAG_BATTLE => Some(GameState::Battle),
            STATE_TAG_TRAVEL => Some(GameState::Travel),
            STATE_TAG_WELCOME => Some(GameState::Welcome),
            STATE_TAG_DEATH => Some(GameState::Death),
            _ => None,
        }
    }

    /// State to start in after a restart. Death has already wiped the save,
    /// so a dead player wakes up on the welcome screen.
    pub fn resume_target(saved: Option<i32>) -> Self {
        match saved.and_then(GameState::from_tag) {
            Some(GameState::Death) | None => GameState::Welcome,
            Some(state) => state,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameState::Welcome => "Welcome",
            GameState::Travel => "Travel",
            GameState::Battle => "Battle",
            GameState::Death => "Death",
        }
    }
}

/// Everything the game tracks for one play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub player: PlayerProgression,
    /// Present only while in Battle.
    pub encounter: Option<EncounterState>,
}

impl GameSession {
    pub fn new(player: PlayerProgression) -> Self {
        Self {
            state: GameState::Welcome,
            player,
            encounter: None,
        }
    }
}
