//! Penalty Shootout entry point
//!
//! Headless driver: plays a scripted list of shots against the keeper and
//! prints each outcome. A graphical host would call the same engine API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use penalty_shootout::audio::{AudioManager, LogCuePlayer};
use penalty_shootout::consts::SIM_DT;
use penalty_shootout::sim::{Difficulty, Direction, SeededRng, shoot, tick};
use penalty_shootout::{Screen, Settings};

#[derive(Parser)]
#[command(name = "penalty-shootout")]
#[command(about = "Take penalties against a keeper", long_about = None)]
struct Cli {
    /// Keeper difficulty (easy, medium, hard)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Keeper RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file
    #[arg(long, default_value = "penalty_settings.json")]
    settings: PathBuf,

    /// Write the effective difficulty and seed back to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Shots to take, in order (left, center, right)
    #[arg(required = true)]
    shots: Vec<Direction>,
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Penalty Shootout starting...");

    let cli = Cli::parse();
    let mut settings = Settings::load_from(&cli.settings)
        .with_context(|| format!("reading {}", cli.settings.display()))?;
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = Some(difficulty);
    }
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }

    let mut rng = match settings.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    log::info!("Keeper seed: {}", rng.seed());

    if cli.save_settings {
        settings.seed = Some(rng.seed());
        settings
            .save_to(&cli.settings)
            .with_context(|| format!("writing {}", cli.settings.display()))?;
    }

    let mut audio = AudioManager::from_settings(Some(LogCuePlayer), &settings);

    let mut screen = Screen::default();
    if let (Some(lobby), Some(difficulty)) = (screen.lobby_mut(), settings.difficulty) {
        lobby.select(difficulty);
    }
    let state = screen.kick_off()?;
    println!("Difficulty: {}", state.difficulty());

    for (n, direction) in cli.shots.iter().copied().enumerate() {
        let plan = shoot(state, direction, &mut rng)?;
        log::debug!(
            "Shot {}: ball -> {:?} in {}s, keeper -> {:?} in {}s",
            n + 1,
            plan.ball_target,
            plan.ball_flight_secs,
            plan.keeper_target,
            plan.keeper_dive_secs
        );

        let report = loop {
            if let Some(report) = tick(state, SIM_DT) {
                break report;
            }
        };
        audio.play(report.outcome.cue());

        println!(
            "#{:<2} {:<6} keeper {:.2} -> {:<4}  Score: {}",
            n + 1,
            report.direction,
            report.keeper_lane,
            report.outcome.as_str(),
            report.score
        );
    }

    println!(
        "Score: {} / Shots: {} / Saved: {}",
        state.score(),
        state.shots_taken(),
        state.saves()
    );
    screen.back_to_lobby();
    Ok(())
}
