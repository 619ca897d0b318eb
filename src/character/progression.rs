//! Player stats and their persistence bridge.

use crate::combat::types::{DamageType, StatBoost};
use crate::core::constants::{BASE_PLAYER_DAMAGE, BASE_PLAYER_MAX_HEALTH};
use crate::utils::persistence::{PersistKey, PersistenceStore, StoreError};
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerProgression {
    pub max_health: i32,
    /// Raised together with `max_health` by health boosts, never clamped.
    pub current_health: i32,
    pub sword_damage: i32,
    pub magic_damage: i32,
    pub bow_damage: i32,
}

impl Default for PlayerProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerProgression {
    pub fn new() -> Self {
        Self {
            max_health: BASE_PLAYER_MAX_HEALTH,
            current_health: BASE_PLAYER_MAX_HEALTH,
            sword_damage: BASE_PLAYER_DAMAGE,
            magic_damage: BASE_PLAYER_DAMAGE,
            bow_damage: BASE_PLAYER_DAMAGE,
        }
    }

    /// Restores the player from the store, or writes fresh defaults when no
    /// baseline exists yet. `player_max_health` is the baseline key; any other
    /// missing field falls back to its default.
    pub fn load_or_initialize<S: PersistenceStore>(store: &mut S) -> Result<Self, StoreError> {
        if let Some(max_health) = store.read_int(PersistKey::PlayerMaxHealth) {
            let read = |key: PersistKey, default: i32| store.read_int(key).unwrap_or(default);
            let player = Self {
                max_health,
                current_health: read(PersistKey::PlayerCurrentHealth, max_health),
                sword_damage: read(PersistKey::PlayerSwordDamage, BASE_PLAYER_DAMAGE),
                magic_damage: read(PersistKey::PlayerMagicDamage, BASE_PLAYER_DAMAGE),
                bow_damage: read(PersistKey::PlayerBowDamage, BASE_PLAYER_DAMAGE),
            };
            debug!("restored player {:?}", player);
            return Ok(player);
        }

        info!("no saved player stats, starting fresh");
        let player = Self::new();
        player.persist_all(store)?;
        Ok(player)
    }

    /// Deletes every player, encounter and state key. Only death does this.
    pub fn clear_all<S: PersistenceStore>(store: &mut S) -> Result<(), StoreError> {
        for key in PersistKey::ALL {
            store.delete(key)?;
        }
        Ok(())
    }

    pub fn persist_all<S: PersistenceStore>(&self, store: &mut S) -> Result<(), StoreError> {
        store.write_int(PersistKey::PlayerMaxHealth, self.max_health)?;
        store.write_int(PersistKey::PlayerCurrentHealth, self.current_health)?;
        store.write_int(PersistKey::PlayerSwordDamage, self.sword_damage)?;
        store.write_int(PersistKey::PlayerMagicDamage, self.magic_damage)?;
        store.write_int(PersistKey::PlayerBowDamage, self.bow_damage)?;
        Ok(())
    }

    pub fn damage_for(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Sword => self.sword_damage,
            DamageType::Magic => self.magic_damage,
            DamageType::Bow => self.bow_damage,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Grows one stat by one and persists only what changed. Health boosts
    /// raise current and max together without clamping.
    pub fn apply_stat_boost<S: PersistenceStore>(
        &mut self,
        boost: StatBoost,
        store: &mut S,
    ) -> Result<(), StoreError> {
        match boost {
            StatBoost::Health => {
                self.max_health += 1;
                self.current_health += 1;
                store.write_int(PersistKey::PlayerMaxHealth, self.max_health)?;
                store.write_int(PersistKey::PlayerCurrentHealth, self.current_health)?;
            }
            StatBoost::Damage(DamageType::Sword) => {
                self.sword_damage += 1;
                store.write_int(PersistKey::PlayerSwordDamage, self.sword_damage)?;
            }
            StatBoost::Damage(DamageType::Magic) => {
                self.magic_damage += 1;
                store.write_int(PersistKey::PlayerMagicDamage, self.magic_damage)?;
            }
            StatBoost::Damage(DamageType::Bow) => {
                self.bow_damage += 1;
                store.write_int(PersistKey::PlayerBowDamage, self.bow_damage)?;
            }
        }
        info!("stat boost {:?} applied", boost);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::MemoryStore;

    #[test]
    fn test_first_load_writes_defaults() {
        let mut store = MemoryStore::new();
        let player = PlayerProgression::load_or_initialize(&mut store).unwrap();

        assert_eq!(player, PlayerProgression::new());
        assert_eq!(player.max_health, 10);
        assert_eq!(player.current_health, 10);
        assert_eq!(store.read_int(PersistKey::PlayerMaxHealth), Some(10));
        assert_eq!(store.read_int(PersistKey::PlayerCurrentHealth), Some(10));
        assert_eq!(store.read_int(PersistKey::PlayerSwordDamage), Some(1));
        assert_eq!(store.read_int(PersistKey::PlayerMagicDamage), Some(1));
        assert_eq!(store.read_int(PersistKey::PlayerBowDamage), Some(1));
    }

    #[test]
    fn test_load_hydrates_saved_stats() {
        let mut store = MemoryStore::new();
        store.write_int(PersistKey::PlayerMaxHealth, 14).unwrap();
        store.write_int(PersistKey::PlayerCurrentHealth, 6).unwrap();
        store.write_int(PersistKey::PlayerSwordDamage, 3).unwrap();
        store.write_int(PersistKey::PlayerMagicDamage, 7).unwrap();
        store.write_int(PersistKey::PlayerBowDamage, 2).unwrap();

        let player = PlayerProgression::load_or_initialize(&mut store).unwrap();
        assert_eq!(
            player,
            PlayerProgression {
                max_health: 14,
                current_health: 6,
                sword_damage: 3,
                magic_damage: 7,
                bow_damage: 2,
            }
        );
    }

    #[test]
    fn test_partial_player_keys_fill_defaults() {
        let mut store = MemoryStore::new();
        store.write_int(PersistKey::PlayerMaxHealth, 12).unwrap();
        store.write_int(PersistKey::PlayerBowDamage, 4).unwrap();

        let player = PlayerProgression::load_or_initialize(&mut store).unwrap();
        assert_eq!(player.max_health, 12);
        assert_eq!(player.current_health, 12);
        assert_eq!(player.sword_damage, 1);
        assert_eq!(player.bow_damage, 4);
    }

    #[test]
    fn test_health_boost_raises_both() {
        let mut store = MemoryStore::new();
        let mut player = PlayerProgression::new();
        player.current_health = 4;

        player.apply_stat_boost(StatBoost::Health, &mut store).unwrap();

        assert_eq!(player.max_health, 11);
        assert_eq!(player.current_health, 5);
        assert_eq!(store.read_int(PersistKey::PlayerMaxHealth), Some(11));
        assert_eq!(store.read_int(PersistKey::PlayerCurrentHealth), Some(5));
    }

    #[test]
    fn test_damage_boost_touches_only_one_key() {
        let mut store = MemoryStore::new();
        let mut player = PlayerProgression::new();

        player
            .apply_stat_boost(StatBoost::Damage(DamageType::Magic), &mut store)
            .unwrap();

        assert_eq!(player.magic_damage, 2);
        assert_eq!(player.sword_damage, 1);
        assert_eq!(player.bow_damage, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.read_int(PersistKey::PlayerMagicDamage), Some(2));
    }

    #[test]
    fn test_clear_all_removes_every_key() {
        let mut store = MemoryStore::new();
        for key in PersistKey::ALL {
            store.write_int(key, 1).unwrap();
        }

        PlayerProgression::clear_all(&mut store).unwrap();
        assert!(store.is_empty());

        let player = PlayerProgression::load_or_initialize(&mut store).unwrap();
        assert_eq!(player, PlayerProgression::new());
    }
}
