mod battle_scene;
mod death_scene;
pub mod effects;
pub mod monster_sprites;
mod travel_scene;
mod welcome_scene;

use crate::character::progression::PlayerProgression;
use crate::combat::encounter::EncounterState;
use crate::combat::types::AttackReport;
use crate::core::events::ViewSignal;
use crate::core::game_state::GameState;
use crate::core::state_machine::GameStateMachine;
use crate::travel::movement::MotionSensor;
use crate::utils::persistence::PersistenceStore;
use effects::HapticFlash;
use log::debug;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// What the screen currently shows. Updated only from view signals, the same
/// way the watch face reacts to the core.
#[derive(Debug, Clone)]
pub struct Hud {
    pub view: Option<GameState>,
    pub monster_health: Option<(i32, i32)>,
    pub player_health: Option<i32>,
    pub flash: HapticFlash,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            view: None,
            monster_health: None,
            player_health: None,
            flash: HapticFlash::new(),
        }
    }

    pub fn apply(&mut self, signals: &[ViewSignal], now: Instant) {
        for signal in signals {
            debug!("view signal {:?}", signal);
            match *signal {
                ViewSignal::EnterView(state) => self.view = Some(state),
                ViewSignal::ExitView(state) => {
                    if self.view == Some(state) {
                        self.view = None;
                    }
                    if state == GameState::Battle {
                        self.monster_health = None;
                        self.player_health = None;
                    }
                }
                ViewSignal::MonsterHealth { current, max } => {
                    self.monster_health = Some((current, max))
                }
                ViewSignal::PlayerHealth(health) => self.player_health = Some(health),
                ViewSignal::Haptic(pattern) => self.flash.trigger(pattern, now),
            }
        }
    }
}

/// Read-only view of the machine handed to the scenes.
pub struct SceneContext<'a> {
    pub player: &'a PlayerProgression,
    pub encounter: Option<&'a EncounterState>,
    pub last_attack: Option<&'a AttackReport>,
    pub travel_progress: Option<(i64, i64)>,
}

impl<'a> SceneContext<'a> {
    pub fn from_machine<S, M, R>(machine: &'a GameStateMachine<S, M, R>) -> Self
    where
        S: PersistenceStore,
        M: MotionSensor,
        R: Rng,
    {
        Self {
            player: machine.player(),
            encounter: machine.encounter(),
            last_attack: machine.last_attack(),
            travel_progress: machine.travel_progress(),
        }
    }
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, hud: &Hud, ctx: &SceneContext, now: Instant) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Watch face
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let border_color = hud.flash.border_color(now).unwrap_or(Color::DarkGray);
    let face = Block::default()
        .borders(Borders::ALL)
        .border_type(if hud.flash.is_active(now) {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color))
        .title(" Legend of Xor ");
    let inner = face.inner(v_chunks[0]);
    frame.render_widget(face, v_chunks[0]);

    match hud.view {
        Some(GameState::Welcome) => welcome_scene::draw_welcome_scene(frame, inner),
        Some(GameState::Travel) => travel_scene::draw_travel_scene(frame, inner, ctx),
        Some(GameState::Battle) => battle_scene::draw_battle_scene(frame, inner, hud, ctx),
        Some(GameState::Death) => death_scene::draw_death_scene(frame, inner),
        None => {}
    }

    draw_footer(frame, v_chunks[1], hud.view);
}

fn draw_footer(frame: &mut Frame, area: Rect, view: Option<GameState>) {
    let text = match view {
        Some(GameState::Battle) => "[↑/k] Sword  [Enter] Magic  [↓/j] Bow  [q] Quit",
        Some(GameState::Travel) => "[w] Walk  [q] Quit",
        _ => "[Enter] Continue  [q] Quit",
    };
    let footer = Paragraph::new(Line::from(text))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Centers a block of `height` rows vertically inside `area`.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let top = area.height.saturating_sub(height) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: height.min(area.height),
    }
}
