//! Dodge Machina headless runner
//!
//! Steps the simulation without a window: useful for balancing tuning files
//! and for watching the autopilot play.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use dodge_machina::Tuning;
use dodge_machina::autopilot::Autopilot;
use dodge_machina::consts::SIM_DT;
use dodge_machina::presentation::Hud;
use dodge_machina::sim::{GameEvent, GameState, SimRng, TickInput, tick};

#[derive(Debug, Parser)]
#[command(name = "dodge-machina", about = "Run Dodge Machina headless")]
struct Args {
    /// Seed for the random stream
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Maximum frames to simulate
    #[arg(long, default_value_t = 60 * 60)]
    frames: u64,

    /// JSON tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Let the autopilot dodge
    #[arg(long)]
    autopilot: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("failed to load tuning file {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.frames == 0 {
        return Err(anyhow!("--frames must be > 0"));
    }

    let tuning = load_tuning(args.tuning.as_ref())?;
    let mut state = GameState::with_tuning(tuning, SimRng::new(args.seed))
        .context("tuning rejected")?;
    let mut pilot = args.autopilot.then(Autopilot::new);
    log::info!("Dodge Machina starting with seed {}", args.seed);

    let mut shots = 0u64;
    let mut kills = 0u64;
    let mut steps = 0u64;
    while steps < args.frames && !state.is_game_over() {
        let tap = pilot
            .as_mut()
            .and_then(|p| p.next_tap(&state.snapshot()));
        tick(&mut state, &TickInput { tap }, SIM_DT);
        steps += 1;

        for event in &state.events {
            match event {
                GameEvent::ShotFired => shots += 1,
                GameEvent::EnemyRammed | GameEvent::EnemiesCollided => kills += 1,
                GameEvent::ShieldLost => {
                    log::info!(
                        "Frame {}: shield lost ({} left)",
                        state.frame,
                        state.world.player.shield.max(0)
                    )
                }
                _ => {}
            }
        }
    }

    let snapshot = state.snapshot();
    let hud = Hud::from_snapshot(&snapshot);
    println!(
        "{} | {} | frames: {} | shots fired: {} | kills: {}{}",
        hud.score,
        hud.shields,
        snapshot.frame,
        shots,
        kills,
        hud.banner.map(|b| format!(" | {}", b)).unwrap_or_default()
    );

    if args.snapshot {
        let json =
            serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;
        println!("{}", json);
    }

    Ok(())
}
