//! Command-line recorder for scripted baseball games.
//!
//! Reads a game script (one driver event per line), feeds it through a
//! play-by-play recorder and writes the results to an output directory:
//!
//! ```text
//! script.jsonl --> recorder --> play_by_play.json, events.jsonl, summary.json, narration.txt
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use pbp_events::TeamNum;
use pbp_recorder::{default_config_toml, record_script, OutputWriter, RecorderConfig};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the recorder
#[derive(Parser, Debug)]
#[command(name = "pbp")]
#[command(about = "Record a scripted baseball game as play-by-play")]
struct Args {
    /// Game script in JSON Lines format
    script: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record without stats and skip the play-by-play export
    #[arg(long)]
    inactive: bool,

    /// JSON file carried as the box score of the init entry
    #[arg(long)]
    box_score: Option<PathBuf>,

    /// Directory for output files
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Also write a plain-text narration
    #[arg(long)]
    narrate: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml()?);
        return Ok(());
    }

    let Some(script) = args.script.as_deref() else {
        bail!("no game script given");
    };

    let mut config = match &args.config {
        Some(path) => RecorderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RecorderConfig::default(),
    };
    if args.inactive {
        config.recorder.active = false;
    }
    if args.narrate {
        config.output.narrate = true;
    }
    info!(
        active = config.recorder.active,
        pretty = config.output.pretty,
        narrate = config.output.narrate,
        "configuration loaded"
    );

    let box_score: Value = match &args.box_score {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading box score {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing box score {}", path.display()))?
        }
        None => Value::Null,
    };

    let recorder = record_script(&config, script)
        .with_context(|| format!("recording {}", script.display()))?;
    if !recorder.is_game_over() {
        warn!("script ended before gameOver");
    }

    let writer = OutputWriter::new(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?
        .with_pretty(config.output.pretty);
    let files = writer
        .write_game(&recorder, box_score, config.output.narrate)
        .context("writing output files")?;

    let summary = recorder.summary();
    let line = &summary.line_score;
    info!(
        innings = line.innings,
        home = line.total(TeamNum::Home),
        away = line.total(TeamNum::Away),
        winner = ?summary.winner(),
        summary = %files.summary.display(),
        "game recorded"
    );

    Ok(())
}
