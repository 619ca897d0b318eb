// Travel sampling
pub const TRAVEL_POLL_INTERVAL_MS: u64 = 3000;
/// Accumulated motion needed before an encounter fires. Earlier builds used
/// 10000, which made fights trigger almost constantly.
pub const ENCOUNTER_FREQUENCY: i64 = 70000;

// Combat
pub const RESISTED_DAMAGE_DIVISOR: i32 = 5;

// Player defaults
pub const BASE_PLAYER_MAX_HEALTH: i32 = 10;
pub const BASE_PLAYER_DAMAGE: i32 = 1;

// Persisted game state tags
pub const STATE_TAG_BATTLE: i32 = 0;
pub const STATE_TAG_TRAVEL: i32 = 1;
pub const STATE_TAG_WELCOME: i32 = 2;
pub const STATE_TAG_DEATH: i32 = 3;

// Terminal front-end
pub const UI_POLL_INTERVAL_MS: u64 = 50;
pub const HAPTIC_SHORT_MS: u64 = 150;
pub const HAPTIC_DOUBLE_MS: u64 = 400;
pub const HAPTIC_LONG_MS: u64 = 800;
