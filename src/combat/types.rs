use serde::{Deserialize, Serialize};

/// The three ways the player can attack. Each is a distinct bit so a set of
/// resistances fits in one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Sword,
    Magic,
    Bow,
}

impl DamageType {
    pub fn all() -> [DamageType; 3] {
        [DamageType::Sword, DamageType::Magic, DamageType::Bow]
    }

    pub fn bit(&self) -> u8 {
        match self {
            DamageType::Sword => 1,
            DamageType::Magic => 2,
            DamageType::Bow => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Sword => "Sword",
            DamageType::Magic => "Magic",
            DamageType::Bow => "Bow",
        }
    }
}

/// Set of damage types a monster shrugs off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistances(u8);

impl Resistances {
    pub fn of(types: &[DamageType]) -> Self {
        Self(types.iter().fold(0, |bits, t| bits | t.bit()))
    }

    pub fn contains(&self, damage_type: DamageType) -> bool {
        self.0 & damage_type.bit() != 0
    }
}

/// Which player stat grows by one when a monster is defeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatBoost {
    Damage(DamageType),
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Monster survived; the fight goes on.
    Continue,
    /// Monster health reached zero.
    Victory,
    /// The counter-attack brought the player to zero.
    PlayerDeath,
}

/// Everything that happened during one attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    pub damage_type: DamageType,
    pub damage_dealt: i32,
    pub was_resisted: bool,
    pub monster_health: i32,
    pub monster_max_health: i32,
    /// Damage taken from the counter-attack, if the monster landed one.
    pub counter_damage: Option<i32>,
    pub player_health: i32,
    /// Stat granted on victory.
    pub stat_boost: Option<StatBoost>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_bits_are_distinct() {
        let bits: Vec<u8> = DamageType::all().iter().map(|t| t.bit()).collect();
        assert_eq!(bits, vec![1, 2, 4]);
    }

    #[test]
    fn test_resistance_set() {
        let res = Resistances::of(&[DamageType::Sword, DamageType::Bow]);
        assert!(res.contains(DamageType::Sword));
        assert!(!res.contains(DamageType::Magic));
        assert!(res.contains(DamageType::Bow));
        assert_eq!(Resistances::default(), Resistances::of(&[]));
        assert!(!Resistances::default().contains(DamageType::Magic));
    }
}
