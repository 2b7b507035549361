//! Headless Flappy Bird runner.
//!
//! Usage:
//!   flap-demo                          # 300 frames at 60 Hz
//!   flap-demo --frames 600 --dt 0.033
//!   flap-demo --config game.json --manifest assets.json
//!
//! Set `RUST_LOG=debug` to see scene and asset events.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use flap_demo::{FlappyGame, FrameStats, GameRunner};
use flap_engine::{AssetManifest, GameConfig, ManifestLoader, RenderBuffer};

const DEFAULT_MANIFEST: &str = include_str!("../assets/manifest.json");

#[derive(Parser)]
#[command(name = "flap-demo")]
#[command(about = "Run the Flappy Bird scene headlessly and report per-run stats")]
struct Cli {
    /// Number of frames to tick
    #[arg(long, default_value_t = 300)]
    frames: u32,
    /// Frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// JSON game config overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON asset manifest (defaults to the bundled one)
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.dt.is_nan() || cli.dt <= 0.0 {
        anyhow::bail!("--dt must be positive, got {}", cli.dt);
    }

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig {
            font_path: Some("assets/fonts/arial.ttf".to_string()),
            ..GameConfig::default()
        },
    };
    let manifest = match &cli.manifest {
        Some(path) => {
            let json = read(path)?;
            AssetManifest::from_json(&json)
                .with_context(|| format!("Failed to parse manifest {}", path.display()))?
        }
        None => AssetManifest::from_json(DEFAULT_MANIFEST).context("Bundled manifest is invalid")?,
    };

    let renderer = RenderBuffer::new(config.width as f32, config.height as f32);
    let mut runner = GameRunner::new(FlappyGame::new(config), renderer, ManifestLoader::new(manifest));
    runner.init();

    let mut totals = FrameStats::default();
    for _ in 0..cli.frames {
        if !runner.is_running() {
            break;
        }
        let frame = runner.tick(cli.dt);
        totals.steps += frame.steps;
        totals.scripts += frame.scripts;
        totals.render.drawn += frame.render.drawn;
        totals.render.skipped += frame.render.skipped;
    }

    log::info!(
        "ran {} frames: {} logic steps, {} script calls, {} sprites drawn, {} skipped, last fps {}",
        runner.frames(),
        totals.steps,
        totals.scripts,
        totals.render.drawn,
        totals.render.skipped,
        runner.fps()
    );
    println!(
        "{} frames, {} steps, {} sprites drawn ({} skipped), {} bytes of instance data in the last frame",
        runner.frames(),
        totals.steps,
        totals.render.drawn,
        totals.render.skipped,
        runner.renderer().as_bytes().len()
    );
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let json = read(path)?;
    GameConfig::from_json(&json).with_context(|| format!("Failed to parse config {}", path.display()))
}
