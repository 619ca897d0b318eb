//! The top-level game loop: four screens, the transitions between them and
//! the setup/teardown each screen needs.

use super::constants::{ENCOUNTER_FREQUENCY, TRAVEL_POLL_INTERVAL_MS};
use super::events::{HapticPattern, ViewSignal};
use super::game_state::{GameSession, GameState};
use super::timer::RepeatingTimer;
use crate::character::progression::PlayerProgression;
use crate::combat::encounter::{EncounterGenerator, EncounterState};
use crate::combat::logic::resolve_attack;
use crate::combat::monsters::MonsterCatalog;
use crate::combat::types::{AttackOutcome, AttackReport, DamageType};
use crate::travel::movement::{MotionSensor, MovementTrigger};
use crate::utils::persistence::{PersistKey, PersistenceStore, StoreError};
use log::info;
use rand::Rng;
use std::time::{Duration, Instant};

/// The three physical buttons of the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Select,
    Down,
}

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Accumulated motion that starts a fight.
    pub encounter_threshold: i64,
    pub travel_poll_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            encounter_threshold: ENCOUNTER_FREQUENCY,
            travel_poll_interval: Duration::from_millis(TRAVEL_POLL_INTERVAL_MS),
        }
    }
}

/// Resources held only while travelling.
#[derive(Debug)]
struct TravelSession {
    trigger: MovementTrigger,
    timer: RepeatingTimer,
}

/// Owns the session and every collaborator the core talks to. All entry
/// points take the current time and return the view signals they produced.
pub struct GameStateMachine<S, M, R> {
    store: S,
    sensor: M,
    rng: R,
    catalog: MonsterCatalog,
    config: GameConfig,
    session: GameSession,
    travel: Option<TravelSession>,
    last_attack: Option<AttackReport>,
}

impl<S, M, R> GameStateMachine<S, M, R>
where
    S: PersistenceStore,
    M: MotionSensor,
    R: Rng,
{
    /// Restores the saved session and sets up the screen it was on.
    pub fn start(
        mut store: S,
        sensor: M,
        rng: R,
        catalog: MonsterCatalog,
        config: GameConfig,
        now: Instant,
    ) -> Result<(Self, Vec<ViewSignal>), StoreError> {
        let player = PlayerProgression::load_or_initialize(&mut store)?;
        let state = GameState::resume_target(store.read_int(PersistKey::GameState));
        info!("starting in {}", state.name());

        let mut machine = Self {
            store,
            sensor,
            rng,
            catalog,
            config,
            session: GameSession::new(player),
            travel: None,
            last_attack: None,
        };
        machine.session.state = state;

        let mut signals = Vec::new();
        machine.enter(state, now, &mut signals)?;
        Ok((machine, signals))
    }

    /// Confirm advances Welcome and Death; it means nothing elsewhere.
    pub fn handle_confirm(&mut self, now: Instant) -> Result<Vec<ViewSignal>, StoreError> {
        let mut signals = Vec::new();
        match self.session.state {
            GameState::Welcome => self.transition(GameState::Travel, now, &mut signals)?,
            GameState::Death => self.transition(GameState::Welcome, now, &mut signals)?,
            GameState::Travel | GameState::Battle => {}
        }
        Ok(signals)
    }

    /// Attacks the current monster. Ignored outside Battle.
    pub fn handle_attack(
        &mut self,
        damage_type: DamageType,
        now: Instant,
    ) -> Result<Vec<ViewSignal>, StoreError> {
        let mut signals = Vec::new();
        if self.session.state != GameState::Battle {
            return Ok(signals);
        }
        let Some(encounter) = self.session.encounter.as_mut() else {
            return Ok(signals);
        };

        let report = resolve_attack(
            &mut self.session.player,
            encounter,
            &mut self.store,
            &mut self.rng,
            damage_type,
        )?;

        match report.outcome {
            AttackOutcome::Continue => {
                if report.counter_damage.is_some() {
                    signals.push(ViewSignal::PlayerHealth(report.player_health));
                    signals.push(ViewSignal::Haptic(HapticPattern::Short));
                }
                signals.push(ViewSignal::MonsterHealth {
                    current: report.monster_health,
                    max: report.monster_max_health,
                });
            }
            AttackOutcome::PlayerDeath => {
                signals.push(ViewSignal::MonsterHealth {
                    current: report.monster_health,
                    max: report.monster_max_health,
                });
                self.transition(GameState::Death, now, &mut signals)?;
            }
            AttackOutcome::Victory => {
                self.transition(GameState::Travel, now, &mut signals)?;
            }
        }

        self.last_attack = Some(report);
        Ok(signals)
    }

    /// Routes a raw button press. In battle the buttons are sword, magic and
    /// bow from top to bottom; on the welcome and death screens any button
    /// confirms.
    pub fn handle_button(
        &mut self,
        button: Button,
        now: Instant,
    ) -> Result<Vec<ViewSignal>, StoreError> {
        match (self.session.state, button) {
            (GameState::Battle, Button::Up) => self.handle_attack(DamageType::Sword, now),
            (GameState::Battle, Button::Select) => self.handle_attack(DamageType::Magic, now),
            (GameState::Battle, Button::Down) => self.handle_attack(DamageType::Bow, now),
            (GameState::Welcome | GameState::Death, _) => self.handle_confirm(now),
            (GameState::Travel, _) => Ok(Vec::new()),
        }
    }

    /// Drives the travel timer. Samples the sensor when the timer is due and
    /// starts a fight once enough motion has built up.
    pub fn tick(&mut self, now: Instant) -> Result<Vec<ViewSignal>, StoreError> {
        let mut signals = Vec::new();
        let Some(travel) = self.travel.as_mut() else {
            return Ok(signals);
        };
        if !travel.timer.poll(now) {
            return Ok(signals);
        }

        let sample = self.sensor.peek();
        if travel.trigger.record(sample) {
            info!("enough movement, monster approaching");
            signals.push(ViewSignal::Haptic(HapticPattern::Double));
            self.transition(GameState::Battle, now, &mut signals)?;
        }
        Ok(signals)
    }

    /// Releases whatever the current screen holds, without touching the
    /// saved state, and hands back the store and sensor.
    pub fn shutdown(mut self) -> (S, M) {
        let mut signals = Vec::new();
        self.exit(self.session.state, &mut signals);
        info!("shut down in {}", self.session.state.name());
        (self.store, self.sensor)
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn player(&self) -> &PlayerProgression {
        &self.session.player
    }

    pub fn encounter(&self) -> Option<&EncounterState> {
        self.session.encounter.as_ref()
    }

    pub fn last_attack(&self) -> Option<&AttackReport> {
        self.last_attack.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sensor_mut(&mut self) -> &mut M {
        &mut self.sensor
    }

    /// Accumulated motion and the threshold, while travelling.
    pub fn travel_progress(&self) -> Option<(i64, i64)> {
        self.travel
            .as_ref()
            .map(|t| (t.trigger.total(), t.trigger.threshold()))
    }

    /// When the travel timer next wants a tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.travel.as_ref().map(|t| t.timer.deadline())
    }

    fn transition(
        &mut self,
        next: GameState,
        now: Instant,
        signals: &mut Vec<ViewSignal>,
    ) -> Result<(), StoreError> {
        let previous = self.session.state;
        self.exit(previous, signals);

        self.session.state = next;
        self.store.write_int(PersistKey::GameState, next.tag())?;
        info!("{} -> {}", previous.name(), next.name());

        self.enter(next, now, signals)
    }

    fn enter(
        &mut self,
        state: GameState,
        now: Instant,
        signals: &mut Vec<ViewSignal>,
    ) -> Result<(), StoreError> {
        signals.push(ViewSignal::EnterView(state));
        match state {
            GameState::Welcome => {
                self.session.player = PlayerProgression::load_or_initialize(&mut self.store)?;
            }
            GameState::Travel => {
                self.sensor.subscribe();
                let baseline = self.sensor.peek();
                self.travel = Some(TravelSession {
                    trigger: MovementTrigger::new(self.config.encounter_threshold, baseline),
                    timer: RepeatingTimer::start(now, self.config.travel_poll_interval),
                });
            }
            GameState::Battle => {
                let generator = EncounterGenerator::new(&self.catalog);
                let (encounter, _resumed) =
                    generator.resume_or_generate(&mut self.rng, &mut self.store)?;
                signals.push(ViewSignal::MonsterHealth {
                    current: encounter.monster_current_health,
                    max: encounter.monster.max_health,
                });
                signals.push(ViewSignal::PlayerHealth(self.session.player.current_health));
                self.session.encounter = Some(encounter);
                self.last_attack = None;
            }
            GameState::Death => {
                signals.push(ViewSignal::Haptic(HapticPattern::Long));
            }
        }
        Ok(())
    }

    fn exit(&mut self, state: GameState, signals: &mut Vec<ViewSignal>) {
        match state {
            GameState::Travel => {
                if let Some(travel) = self.travel.take() {
                    travel.timer.cancel();
                    self.sensor.unsubscribe();
                }
            }
            GameState::Battle => {
                self.session.encounter = None;
            }
            GameState::Welcome | GameState::Death => {}
        }
        signals.push(ViewSignal::ExitView(state));
    }
}
