use chrono::Utc;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use legend_of_xor::character::PlayerProgression;
use legend_of_xor::core::constants::UI_POLL_INTERVAL_MS;
use legend_of_xor::input::{map_key, InputAction};
use legend_of_xor::travel::SimulatedAccelerometer;
use legend_of_xor::ui::{draw_ui, Hud, SceneContext};
use legend_of_xor::utils::build_info;
use legend_of_xor::{GameConfig, GameStateMachine, JsonFileStore, MonsterCatalog};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

type Game = GameStateMachine<JsonFileStore, SimulatedAccelerometer, StdRng>;

#[derive(Debug, Parser)]
#[command(name = "xor", disable_version_flag = true)]
#[command(about = "The Legend of Xor - walk, fight, level up, die, repeat")]
struct Args {
    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,

    /// Seed for monster draws and combat rolls (default: current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Save file location (default: the platform config directory)
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Accumulated movement needed to start a fight
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    threshold: Option<i64>,

    /// Wipe the save before starting
    #[arg(long)]
    reset: bool,
}

/// Runs `restore` when dropped, so every exit after raw mode is switched on
/// hands the terminal back.
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    // Best effort: we may be unwinding from a failed setup
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, Box<dyn Error>> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn init_logging(log_path: &Path) -> io::Result<()> {
    let file = File::create(log_path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if args.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    let save_path = match args.save_file {
        Some(path) => path,
        None => JsonFileStore::default_path()?,
    };
    if let Some(parent) = save_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    init_logging(&save_path.with_file_name("xor.log"))?;
    info!("{}", build_info::version_line());

    let mut store = JsonFileStore::open(&save_path)?;
    if args.reset {
        info!("wiping save at {}", save_path.display());
        PlayerProgression::clear_all(&mut store)?;
    }

    let seed = args.seed.unwrap_or_else(|| Utc::now().timestamp() as u64);
    let mut config = GameConfig::default();
    if let Some(threshold) = args.threshold {
        config.encounter_threshold = threshold;
    }

    let now = Instant::now();
    let (mut machine, signals) = GameStateMachine::start(
        store,
        SimulatedAccelerometer::new(seed.rotate_left(32)),
        StdRng::seed_from_u64(seed),
        MonsterCatalog::standard()?,
        config,
        now,
    )?;
    info!("saving to {}", machine.store().path().display());
    let mut hud = Hud::new();
    hud.apply(&signals, now);

    enable_raw_mode()?;
    let guard = RestoreOnDrop {
        restore: restore_terminal,
    };
    let result =
        open_terminal().and_then(|mut terminal| run_game(&mut terminal, &mut machine, &mut hud));
    drop(guard);

    let (store, _sensor) = machine.shutdown();
    info!("progress kept in {}", store.path().display());
    result?;

    println!("Goodbye!");
    Ok(())
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    machine: &mut Game,
    hud: &mut Hud,
) -> Result<(), Box<dyn Error>> {
    let frame_interval = Duration::from_millis(UI_POLL_INTERVAL_MS);

    loop {
        let now = Instant::now();
        terminal.draw(|frame| {
            let ctx = SceneContext::from_machine(machine);
            draw_ui(frame, hud, &ctx, now);
        })?;

        // Wake for the travel timer, but keep redrawing for the flash
        let wait = machine
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(frame_interval)
            .min(frame_interval);

        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(InputAction::Quit) => return Ok(()),
                    Some(InputAction::Shake) => machine.sensor_mut().shake(),
                    Some(InputAction::Press(button)) => {
                        let now = Instant::now();
                        let signals = machine.handle_button(button, now)?;
                        hud.apply(&signals, now);
                    }
                    None => {}
                }
            }
        }

        let now = Instant::now();
        let signals = machine.tick(now)?;
        hud.apply(&signals, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_threshold_must_be_positive() {
        assert!(Args::try_parse_from(["xor", "--threshold", "0"]).is_err());
        assert!(Args::try_parse_from(["xor", "--threshold", "-5"]).is_err());

        let args = Args::try_parse_from(["xor", "--threshold", "1"]).unwrap();
        assert_eq!(args.threshold, Some(1));
    }

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(0);

        let setup = || -> io::Result<()> {
            let _guard = RestoreOnDrop {
                restore: || restored.set(restored.get() + 1),
            };
            Err(io::Error::new(io::ErrorKind::Other, "no terminal"))
        };

        assert!(setup().is_err());
        assert_eq!(restored.get(), 1);
    }
}
