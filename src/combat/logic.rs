use super::encounter::EncounterState;
use super::types::{AttackOutcome, AttackReport, DamageType};
use crate::character::progression::PlayerProgression;
use crate::core::constants::RESISTED_DAMAGE_DIVISOR;
use crate::utils::persistence::{PersistKey, PersistenceStore, StoreError};
use log::{debug, info};
use rand::Rng;

/// Damage an attack actually deals. Resisted attacks keep a fifth of the
/// base, truncated, so weak attacks can deal nothing at all.
pub fn effective_damage(base_damage: i32, resisted: bool) -> i32 {
    if resisted {
        base_damage / RESISTED_DAMAGE_DIVISOR
    } else {
        base_damage
    }
}

/// Applies one player attack to the active encounter.
///
/// On victory the monster's stat boost is granted and the encounter keys are
/// cleared. If the monster survives, its health is saved and it may strike
/// back; a lethal counter wipes every persisted key.
pub fn resolve_attack<S: PersistenceStore, R: Rng>(
    player: &mut PlayerProgression,
    encounter: &mut EncounterState,
    store: &mut S,
    rng: &mut R,
    damage_type: DamageType,
) -> Result<AttackReport, StoreError> {
    let base_damage = player.damage_for(damage_type);
    let was_resisted = encounter.monster.resistances.contains(damage_type);
    let damage_dealt = effective_damage(base_damage, was_resisted);

    encounter.monster_current_health -= damage_dealt;
    debug!(
        "{} hits {} for {} (resisted: {}), {} hp left",
        damage_type.name(),
        encounter.monster.name,
        damage_dealt,
        was_resisted,
        encounter.monster_current_health
    );

    let mut report = AttackReport {
        outcome: AttackOutcome::Continue,
        damage_type,
        damage_dealt,
        was_resisted,
        monster_health: encounter.monster_current_health,
        monster_max_health: encounter.monster.max_health,
        counter_damage: None,
        player_health: player.current_health,
        stat_boost: None,
    };

    if !encounter.is_monster_alive() {
        let boost = encounter.monster.stat_boost;
        player.apply_stat_boost(boost, store)?;
        store.delete(PersistKey::MonsterCurrentHealth)?;
        store.delete(PersistKey::MonsterIndex)?;
        info!("defeated {}", encounter.monster.name);

        report.outcome = AttackOutcome::Victory;
        report.stat_boost = Some(boost);
        report.player_health = player.current_health;
        return Ok(report);
    }

    store.write_int(
        PersistKey::MonsterCurrentHealth,
        encounter.monster_current_health,
    )?;

    let roll: f64 = rng.gen();
    if roll < encounter.monster.hit_chance {
        let counter = encounter.monster.counter_damage;
        player.current_health -= counter;
        report.counter_damage = Some(counter);
        report.player_health = player.current_health;
        debug!(
            "{} strikes back for {} (roll {:.3})",
            encounter.monster.name, counter, roll
        );

        if !player.is_alive() {
            PlayerProgression::clear_all(store)?;
            info!("slain by {}", encounter.monster.name);
            report.outcome = AttackOutcome::PlayerDeath;
            return Ok(report);
        }

        store.write_int(PersistKey::PlayerCurrentHealth, player.current_health)?;
    }

    Ok(report)
}
