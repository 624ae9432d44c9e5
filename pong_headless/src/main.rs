//! Headless shell around `game_core`: scripted input, fixed-rate pacing and
//! log output in place of a window.

mod input;
mod pacer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_core::{step, Config, GameRng, MatchState, Score};
use log::info;

use input::{Idle, InputProvider, Sweep, Tracker};
use pacer::Pacer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    /// Player paddle never moves
    Idle,
    /// Player paddle follows the ball like the opponent does
    Tracker,
    /// Player paddle sweeps wall to wall
    Sweep,
}

impl PlayerKind {
    fn provider(self) -> Box<dyn InputProvider> {
        match self {
            PlayerKind::Idle => Box::new(Idle),
            PlayerKind::Tracker => Box::new(Tracker),
            PlayerKind::Sweep => Box::new(Sweep::default()),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pong_headless", about = "Run a Pong match without a window")]
struct Args {
    /// JSON config overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for serve directions (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Input provider for the player paddle
    #[arg(long, value_enum, default_value_t = PlayerKind::Tracker)]
    player: PlayerKind,

    /// Pace ticks at the configured rate and pause after each point
    #[arg(long)]
    realtime: bool,

    /// Log a JSON snapshot every N ticks (0 = off)
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,

    /// Stop once either side reaches this many points (0 = never)
    #[arg(long, default_value_t = 0)]
    first_to: u32,
}

/// What the shell reports once the loop ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Summary {
    ticks: u64,
    score: Score,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn run(args: &Args, config: Config, rng: &mut GameRng) -> Result<Summary> {
    let mut state = MatchState::new(config, rng);
    let mut provider = args.player.provider();
    let mut pacer = args
        .realtime
        .then(|| Pacer::new(state.config.tick_duration()));

    while state.tick < args.ticks {
        if let Some(pacer) = pacer.as_mut() {
            pacer.wait();
        }

        let intent = provider.intent(&state);
        let events = step(&mut state, intent, rng);

        if let Some(side) = events.scored {
            info!(
                "tick {}: {:?} scores, {} - {}",
                state.tick, side, state.score.player, state.score.opponent
            );
            if let Some(pacer) = pacer.as_mut() {
                pacer.pause(state.config.score_pause());
            }
            if args.first_to > 0 && state.score.leader_at(args.first_to).is_some() {
                break;
            }
        }

        if args.snapshot_every > 0 && state.tick % args.snapshot_every == 0 {
            let json = serde_json::to_string(&state.snapshot()).context("serializing snapshot")?;
            info!("{}", json);
        }
    }

    Ok(Summary {
        ticks: state.tick,
        score: state.score,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    info!(
        "config: {}",
        serde_json::to_string(&config).context("serializing config")?
    );

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let summary = run(&args, config, &mut rng)?;
    info!(
        "finished after {} ticks ({:?} player)",
        summary.ticks, args.player
    );
    println!("{} - {}", summary.score.player, summary.score.opponent);
    Ok(())
}
