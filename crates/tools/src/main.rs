mod render;
mod settings;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon::{DungeonMap, MoveMode, Script, Start, parse_script, run_steps_with};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::render::render_ascii;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keystroke script, e.g. `n123wwdd:q` (new game, seed 123) or `lssa:q` (load)
    script: Option<String>,
    /// Seed for a new game when the script carries none
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file with generation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Slide until blocked instead of moving one cell per key
    #[arg(long)]
    slide: bool,
    /// Save file location (defaults to the per-user data directory)
    #[arg(long)]
    save: Option<PathBuf>,
    /// Print only the summary line, not the map
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn save_path(&self) -> Result<PathBuf> {
        self.save
            .clone()
            .or_else(settings::default_save_path)
            .context("no save location available; pass --save <path>")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let script = match &args.script {
        Some(text) => parse_script(text).with_context(|| format!("invalid script: {text:?}"))?,
        None => Script { start: Start::New { seed: None }, steps: Vec::new() },
    };

    let mut map = match script.start {
        Start::New { seed } => {
            let config = settings::load_config(args.config.as_deref())?;
            DungeonMap::new_game_with(config, seed.or(args.seed))
                .context("generation config rejected")?
        }
        Start::Load => {
            let path = args.save_path()?;
            DungeonMap::load(&path)
                .with_context(|| format!("failed to load save file: {}", path.display()))?
        }
    };

    let mode = if args.slide { MoveMode::Slide } else { MoveMode::Normal };
    let summary = run_steps_with(&mut map, &script.steps, mode, |map| {
        let path = args.save_path()?;
        map.write_atomic(&path)
            .with_context(|| format!("failed to write save file: {}", path.display()))
    })?;
    info!(
        moves = summary.moves,
        collected = summary.collected,
        saves = summary.saves,
        "script applied"
    );

    if !args.quiet {
        print!("{}", render_ascii(&map.snapshot()));
    }
    let player = map.player();
    println!(
        "seed: {} player: ({}, {}) items left: {} fingerprint: 0x{:016x}",
        map.seed(),
        player.x,
        player.y,
        map.items_remaining(),
        map.fingerprint()
    );
    if map.is_degenerate() {
        println!("warning: no door site was found; the player starts at the origin");
    }

    Ok(())
}
