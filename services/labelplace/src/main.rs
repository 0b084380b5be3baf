//! Label placement command line tool.
//!
//! Reads a JSON frame file, applies the placement configuration and command
//! script, and prints the accepted label and marker positions of every frame
//! as JSON on stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use labelplace::{run_frames, FrameFile};
use placement::{apply_script, LocatorSet, PlacementConfig};

#[derive(Parser, Debug)]
#[command(name = "labelplace")]
#[command(about = "Place contour labels and pressure markers on animation frames")]
struct Args {
    /// JSON frame file with the candidates of every frame
    #[arg(short, long)]
    frames: PathBuf,

    /// YAML placement configuration
    #[arg(short, long, env = "LABELPLACE_CONFIG")]
    config: Option<PathBuf>,

    /// Command script applied after the configuration
    #[arg(short, long, env = "LABELPLACE_SCRIPT")]
    script: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log as JSON
    #[arg(long)]
    json_logs: bool,

    /// Pretty-print the result
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // RUST_LOG overrides --log-level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    let config = match &args.config {
        Some(path) => PlacementConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlacementConfig::default(),
    };

    let mut set = LocatorSet::from_config(&config)?;

    if let Some(path) = &args.script {
        let script = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let applied = apply_script(&mut set, &script)
            .with_context(|| format!("Failed to apply script {}", path.display()))?;
        info!(applied, "Applied command script");
    }

    let file = FrameFile::load(&args.frames)?;
    info!(
        width = file.width,
        height = file.height,
        frames = file.frames.len(),
        "Loaded frames"
    );

    let results = run_frames(&mut set, &file, &config.pressure)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{}", output);

    Ok(())
}
