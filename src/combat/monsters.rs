//! The fixed monster table.

use super::types::{DamageType, Resistances, StatBoost};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub name: &'static str,
    /// Sprite id resolved by the view layer.
    pub sprite: &'static str,
    pub max_health: i32,
    pub resistances: Resistances,
    /// Chance in [0, 1] that the monster strikes back after surviving a hit.
    pub hit_chance: f64,
    pub counter_damage: i32,
    pub stat_boost: StatBoost,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("monster catalog is empty")]
    Empty,

    #[error("{name} has non-positive max health {max_health}")]
    InvalidHealth { name: &'static str, max_health: i32 },

    #[error("{name} has hit chance {hit_chance} outside [0, 1]")]
    InvalidHitChance { name: &'static str, hit_chance: f64 },

    #[error("{name} has negative counter damage {counter_damage}")]
    NegativeDamage {
        name: &'static str,
        counter_damage: i32,
    },
}

/// Immutable list of monsters. Encounters refer to entries by index, so the
/// order is part of the save format.
#[derive(Debug, Clone)]
pub struct MonsterCatalog {
    monsters: Vec<Monster>,
}

impl MonsterCatalog {
    pub fn new(monsters: Vec<Monster>) -> Result<Self, CatalogError> {
        if monsters.is_empty() {
            return Err(CatalogError::Empty);
        }
        for monster in &monsters {
            if monster.max_health <= 0 {
                return Err(CatalogError::InvalidHealth {
                    name: monster.name,
                    max_health: monster.max_health,
                });
            }
            if !(0.0..=1.0).contains(&monster.hit_chance) {
                return Err(CatalogError::InvalidHitChance {
                    name: monster.name,
                    hit_chance: monster.hit_chance,
                });
            }
            if monster.counter_damage < 0 {
                return Err(CatalogError::NegativeDamage {
                    name: monster.name,
                    counter_damage: monster.counter_damage,
                });
            }
        }
        Ok(Self { monsters })
    }

    /// The ten monsters registered in the shipped game.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(standard_monsters())
    }

    /// Uniform draw over every entry. The range is exactly the populated
    /// catalog, which is never empty.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> (usize, &Monster) {
        let index = rng.gen_range(0..self.monsters.len());
        (index, &self.monsters[index])
    }

    pub fn get(&self, index: usize) -> Option<&Monster> {
        self.monsters.get(index)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }
}

fn monster(
    name: &'static str,
    sprite: &'static str,
    max_health: i32,
    resistances: &[DamageType],
    hit_chance: f64,
    counter_damage: i32,
    stat_boost: StatBoost,
) -> Monster {
    Monster {
        name,
        sprite,
        max_health,
        resistances: Resistances::of(resistances),
        hit_chance,
        counter_damage,
        stat_boost,
    }
}

fn standard_monsters() -> Vec<Monster> {
    use DamageType::{Bow, Magic, Sword};
    use StatBoost::Damage;

    vec![
        monster("Tentacle Mage", "tentacle_mage", 5, &[Magic], 0.3, 2, Damage(Magic)),
        monster("Ent", "ent", 10, &[Bow], 0.5, 1, Damage(Magic)),
        monster("Horned Guard", "horned_guard", 7, &[Sword], 0.5, 1, Damage(Sword)),
        monster("Centaur Slaver", "centaur_slaver", 8, &[Sword], 0.3, 1, Damage(Sword)),
        monster("Disturbed Wraith", "disturbed_wraith", 3, &[Sword, Bow], 0.6, 1, Damage(Magic)),
        monster("Eye Fiend", "eye_fiend", 3, &[Magic], 0.7, 1, Damage(Bow)),
        monster("Juvenile Wyrm", "juvenile_wyrm", 7, &[Sword, Magic], 0.5, 1, Damage(Bow)),
        monster("Noxious Slime", "noxious_slime", 6, &[], 0.3, 2, Damage(Bow)),
        monster("Pixel Golem", "pixel_golem", 7, &[Magic], 0.5, 1, Damage(Magic)),
        monster("Small Fish", "small_fish", 2, &[], 0.1, 4, Damage(Bow)),
    ]
}
