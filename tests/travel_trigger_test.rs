//! Integration test: Travel sampling
//!
//! The sensor is switched on only while travelling, the timer stops the
//! moment a fight starts, and one big jolt starts exactly one fight.

use legend_of_xor::core::events::HapticPattern;
use legend_of_xor::travel::movement::{AccelSample, MotionSensor};
use legend_of_xor::{
    DamageType, GameConfig, GameState, GameStateMachine, MemoryStore, MonsterCatalog, ViewSignal,
};
use rand::rngs::mock::StepRng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Plays back scripted samples and counts subscriptions.
#[derive(Debug, Default)]
struct ScriptedSensor {
    samples: VecDeque<AccelSample>,
    subscribes: u32,
    unsubscribes: u32,
    peeks: u32,
}

impl ScriptedSensor {
    fn with_samples(samples: &[AccelSample]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn is_subscribed(&self) -> bool {
        self.subscribes > self.unsubscribes
    }
}

impl MotionSensor for ScriptedSensor {
    fn subscribe(&mut self) {
        self.subscribes += 1;
    }

    fn unsubscribe(&mut self) {
        self.unsubscribes += 1;
    }

    fn peek(&mut self) -> AccelSample {
        self.peeks += 1;
        self.samples.pop_front().unwrap_or_default()
    }
}

const POLL: Duration = Duration::from_millis(3000);

fn travelling(
    sensor: ScriptedSensor,
    threshold: i64,
) -> (
    GameStateMachine<MemoryStore, ScriptedSensor, StepRng>,
    Instant,
) {
    let start = Instant::now();
    let config = GameConfig {
        encounter_threshold: threshold,
        travel_poll_interval: POLL,
    };
    let (mut machine, _) = GameStateMachine::start(
        MemoryStore::new(),
        sensor,
        StepRng::new(0, 0),
        MonsterCatalog::standard().unwrap(),
        config,
        start,
    )
    .unwrap();
    machine.handle_confirm(start).unwrap();
    assert_eq!(machine.state(), GameState::Travel);
    (machine, start)
}

#[test]
fn test_sensor_subscribed_only_while_travelling() {
    let (mut machine, _) = travelling(ScriptedSensor::default(), 100);
    assert_eq!(machine.sensor_mut().subscribes, 1);
    assert!(machine.sensor_mut().is_subscribed());
    // baseline read on entry
    assert_eq!(machine.sensor_mut().peeks, 1);
}

#[test]
fn test_no_sample_before_interval() {
    let (mut machine, start) = travelling(ScriptedSensor::default(), 100);

    let signals = machine.tick(start + POLL - Duration::from_millis(1)).unwrap();
    assert!(signals.is_empty());
    assert_eq!(machine.sensor_mut().peeks, 1);

    machine.tick(start + POLL).unwrap();
    assert_eq!(machine.sensor_mut().peeks, 2);
}

#[test]
fn test_movement_accumulates_across_ticks() {
    // Each sample moves x by 30 relative to the last one.
    let samples: Vec<AccelSample> = (0..5).map(|i| AccelSample::new(i * 30, 0, 0)).collect();
    let (mut machine, start) = travelling(ScriptedSensor::with_samples(&samples), 100);

    machine.tick(start + POLL).unwrap();
    machine.tick(start + POLL * 2).unwrap();
    assert_eq!(machine.travel_progress(), Some((60, 100)));

    machine.tick(start + POLL * 3).unwrap();
    assert_eq!(machine.travel_progress(), Some((90, 100)));
    assert_eq!(machine.state(), GameState::Travel);

    let signals = machine.tick(start + POLL * 4).unwrap();
    assert_eq!(machine.state(), GameState::Battle);
    assert_eq!(signals[0], ViewSignal::Haptic(HapticPattern::Double));
}

#[test]
fn test_large_overshoot_starts_one_battle() {
    let samples = [AccelSample::default(), AccelSample::new(30_000, 30_000, 0)];
    let (mut machine, start) = travelling(ScriptedSensor::with_samples(&samples), 100);

    let signals = machine.tick(start + POLL).unwrap();
    let battles = signals
        .iter()
        .filter(|s| **s == ViewSignal::EnterView(GameState::Battle))
        .count();
    assert_eq!(battles, 1);
    assert_eq!(machine.state(), GameState::Battle);

    // Timer is gone, so later ticks do nothing at all
    let peeks = machine.sensor_mut().peeks;
    for n in 2..10 {
        assert!(machine.tick(start + POLL * n).unwrap().is_empty());
    }
    assert_eq!(machine.sensor_mut().peeks, peeks);
    assert_eq!(machine.next_deadline(), None);
    assert_eq!(machine.travel_progress(), None);
}

#[test]
fn test_battle_releases_the_sensor() {
    let samples = [AccelSample::default(), AccelSample::new(500, 0, 0)];
    let (mut machine, start) = travelling(ScriptedSensor::with_samples(&samples), 100);

    machine.tick(start + POLL).unwrap();
    assert_eq!(machine.state(), GameState::Battle);
    assert_eq!(machine.sensor_mut().unsubscribes, 1);
    assert!(!machine.sensor_mut().is_subscribed());
}

#[test]
fn test_progress_restarts_after_each_battle() {
    let samples = [AccelSample::default(), AccelSample::new(500, 0, 0)];
    let (mut machine, start) = travelling(ScriptedSensor::with_samples(&samples), 100);
    machine.tick(start + POLL).unwrap();

    // Kill whatever showed up with overwhelming damage
    let mut player = *machine.player();
    player.sword_damage = 1000;
    let (mut store, sensor) = machine.shutdown();
    player.persist_all(&mut store).unwrap();
    let (mut machine, _) = GameStateMachine::start(
        store,
        sensor,
        StepRng::new(0, 0),
        MonsterCatalog::standard().unwrap(),
        GameConfig {
            encounter_threshold: 100,
            travel_poll_interval: POLL,
        },
        start,
    )
    .unwrap();
    assert_eq!(machine.state(), GameState::Battle);

    machine.handle_attack(DamageType::Sword, start).unwrap();
    assert_eq!(machine.state(), GameState::Travel);
    assert_eq!(machine.travel_progress(), Some((0, 100)));
    assert!(machine.sensor_mut().is_subscribed());
}
