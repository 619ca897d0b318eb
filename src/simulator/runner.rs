//! Simulation runner using the real state machine.

use super::config::{AttackPolicy, SimConfig};
use super::report::{RunStats, SimReport};
use crate::character::progression::PlayerProgression;
use crate::combat::encounter::EncounterState;
use crate::combat::logic::effective_damage;
use crate::combat::monsters::{CatalogError, MonsterCatalog};
use crate::combat::types::DamageType;
use crate::core::game_state::GameState;
use crate::core::state_machine::{GameConfig, GameStateMachine};
use crate::travel::sensor::PacedSensor;
use crate::utils::persistence::{MemoryStore, StoreError};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use thiserror::Error;

/// Per-axis swing of the simulated walk. Three axes, both directions, so each
/// sample adds 6x this to the movement total.
const PACE_STEP: i16 = 4000;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("monster catalog rejected: {0}")]
    Catalog(#[from] CatalogError),

    #[error("in-memory store failed: {0}")]
    Store(#[from] StoreError),
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    let catalog = MonsterCatalog::standard()?;
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = match config.seed {
            Some(seed) => seed.wrapping_add(run_idx as u64),
            None => rand::thread_rng().gen(),
        };
        let run = simulate_single_life(config, &catalog, seed)?;
        debug!(
            "run {}/{}: {} victories, died: {}",
            run_idx + 1,
            config.num_runs,
            run.victories,
            run.died
        );
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(all_runs, config.policy))
}

/// Picks the next attack for the given policy.
pub fn choose_attack<R: Rng>(
    policy: AttackPolicy,
    player: &PlayerProgression,
    encounter: &EncounterState,
    rng: &mut R,
) -> DamageType {
    let all = DamageType::all();
    match policy {
        AttackPolicy::Random => all[rng.gen_range(0..all.len())],
        AttackPolicy::Greedy => {
            let mut best = all[0];
            let mut best_damage = i32::MIN;
            for damage_type in all {
                let damage = effective_damage(
                    player.damage_for(damage_type),
                    encounter.monster.resistances.contains(damage_type),
                );
                if damage > best_damage {
                    best = damage_type;
                    best_damage = damage;
                }
            }
            best
        }
    }
}

/// Plays one life from a fresh save until death or the battle cap.
fn simulate_single_life(
    config: &SimConfig,
    catalog: &MonsterCatalog,
    seed: u64,
) -> Result<RunStats, StoreError> {
    let mut policy_rng = StdRng::seed_from_u64(seed.rotate_left(17));
    let mut now = Instant::now();

    let (mut machine, _) = GameStateMachine::start(
        MemoryStore::new(),
        PacedSensor::new(PACE_STEP),
        StdRng::seed_from_u64(seed),
        catalog.clone(),
        GameConfig::default(),
        now,
    )?;
    machine.handle_confirm(now)?;
    let interval = machine.config().travel_poll_interval;

    let mut stats = RunStats::new(seed);

    while stats.victories < config.max_battles_per_run {
        if stats.attacks >= config.max_attacks_per_run {
            stats.timed_out = true;
            break;
        }

        match machine.state() {
            GameState::Travel => {
                now += interval;
                machine.tick(now)?;
                stats.travel_samples += 1;
            }
            GameState::Battle => {
                let Some(encounter) = machine.encounter() else {
                    break;
                };
                let monster_name = encounter.monster.name;
                let damage_type =
                    choose_attack(config.policy, machine.player(), encounter, &mut policy_rng);
                stats.final_player = *machine.player();

                machine.handle_attack(damage_type, now)?;
                stats.attacks += 1;

                match machine.state() {
                    GameState::Travel => {
                        stats.victories += 1;
                        stats.final_player = *machine.player();
                        *stats.victories_by_monster.entry(monster_name).or_insert(0) += 1;
                    }
                    GameState::Death => {
                        stats.died = true;
                        stats.killed_by = Some(monster_name);
                        break;
                    }
                    _ => {}
                }
            }
            GameState::Welcome | GameState::Death => break,
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::monsters::Monster;
    use crate::combat::types::{Resistances, StatBoost};

    fn encounter_resisting(resists: &[DamageType]) -> EncounterState {
        EncounterState {
            monster_index: 0,
            monster: Monster {
                name: "Dummy",
                sprite: "dummy",
                max_health: 5,
                resistances: Resistances::of(resists),
                hit_chance: 0.0,
                counter_damage: 0,
                stat_boost: StatBoost::Health,
            },
            monster_current_health: 5,
        }
    }

    #[test]
    fn test_greedy_avoids_resisted_attack() {
        let mut player = PlayerProgression::new();
        player.sword_damage = 9;
        player.bow_damage = 2;
        let encounter = encounter_resisting(&[DamageType::Sword]);

        let choice = choose_attack(
            AttackPolicy::Greedy,
            &player,
            &encounter,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(choice, DamageType::Bow);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(42),
            max_battles_per_run: 30,
            ..Default::default()
        };

        let first = run_simulation(&config).unwrap();
        let second = run_simulation(&config).unwrap();

        assert_eq!(first.num_runs, 5);
        assert_eq!(first.avg_victories, second.avg_victories);
        assert_eq!(first.deaths_by_monster, second.deaths_by_monster);
    }

    #[test]
    fn test_every_life_ends() {
        let config = SimConfig {
            num_runs: 10,
            seed: Some(7),
            max_battles_per_run: 20,
            policy: AttackPolicy::Random,
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();
        for run in &report.run_stats {
            assert!(run.died || run.victories == 20 || run.timed_out);
        }
    }
}
