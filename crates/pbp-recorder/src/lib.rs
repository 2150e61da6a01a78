//! Play-by-play recording for a baseball game simulation.
//!
//! The game driver reports what happened through a [`PlayByPlayRecorder`];
//! everything else in this crate reads the recorder's log.
//!
//! ```text
//! ┌────────────┐  EventKind   ┌──────────┐  PlayByPlayEntry   ┌───────────┐
//! │ game driver│ ───────────▶ │ recorder │ ─────────────────▶ │ box score │
//! └────────────┘   log_stat   └──────────┘                    └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`recorder`]: The stateful recorder and its export
//! - [`summary`]: Line score and stat totals derived from a log
//! - [`replay`]: Rebuilding game state from an exported play-by-play
//! - [`narrate`]: Plain-text narration of stamped records
//! - [`script`]: Reading driver events from JSON Lines and feeding them in
//! - [`output`]: Writing and reading output files
//! - [`config`]: TOML configuration

pub mod config;
pub mod narrate;
pub mod output;
pub mod recorder;
pub mod replay;
pub mod script;
pub mod summary;

// Re-export recorder types
pub use recorder::{PlayByPlayRecorder, FIRST_INNING};

// Re-export summary types
pub use summary::{GameSummary, LineScore, StatLine, StatTotals, TeamLine};

// Re-export replay types
pub use replay::{replay, Replay, ReplayError};

// Re-export narration
pub use narrate::{narrate, ordinal, Narrator};

// Re-export script helpers
pub use script::{feed, parse_script, read_script, ScriptError};

// Re-export output types
pub use output::{
    read_jsonl, read_play_by_play, read_summary, write_json, write_jsonl, OutputError,
    OutputWriter, WrittenFiles,
};

// Re-export config types
pub use config::{
    default_config_toml, ConfigError, OutputConfig, RecorderConfig, RecorderSection,
    TomlSerializeError,
};

use std::path::Path;
use tracing::info;

/// Errors that can occur across recorder operations.
#[derive(Debug)]
pub enum RecorderError {
    /// Error loading configuration
    Config(ConfigError),
    /// Error serializing configuration
    TomlSerialize(TomlSerializeError),
    /// Error reading a game script
    Script(ScriptError),
    /// Error writing or reading output files
    Output(OutputError),
    /// Exported play-by-play could not be replayed
    Replay(ReplayError),
}

impl std::fmt::Display for RecorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecorderError::Config(e) => write!(f, "Config error: {}", e),
            RecorderError::TomlSerialize(e) => write!(f, "Config error: {}", e),
            RecorderError::Script(e) => write!(f, "Script error: {}", e),
            RecorderError::Output(e) => write!(f, "Output error: {}", e),
            RecorderError::Replay(e) => write!(f, "Replay error: {}", e),
        }
    }
}

impl std::error::Error for RecorderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecorderError::Config(e) => Some(e),
            RecorderError::TomlSerialize(e) => Some(e),
            RecorderError::Script(e) => Some(e),
            RecorderError::Output(e) => Some(e),
            RecorderError::Replay(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RecorderError {
    fn from(e: ConfigError) -> Self {
        RecorderError::Config(e)
    }
}

impl From<TomlSerializeError> for RecorderError {
    fn from(e: TomlSerializeError) -> Self {
        RecorderError::TomlSerialize(e)
    }
}

impl From<ScriptError> for RecorderError {
    fn from(e: ScriptError) -> Self {
        RecorderError::Script(e)
    }
}

impl From<OutputError> for RecorderError {
    fn from(e: OutputError) -> Self {
        RecorderError::Output(e)
    }
}

impl From<ReplayError> for RecorderError {
    fn from(e: ReplayError) -> Self {
        RecorderError::Replay(e)
    }
}

/// Records a scripted game with a recorder built from `config`.
pub fn record_script(
    config: &RecorderConfig,
    script_path: &Path,
) -> Result<PlayByPlayRecorder, RecorderError> {
    let events = read_script(script_path)?;
    let mut recorder = PlayByPlayRecorder::from_config(config);
    feed(&mut recorder, events);

    info!(
        records = recorder.len(),
        inning = recorder.inning(),
        game_over = recorder.is_game_over(),
        "recorded script"
    );
    Ok(recorder)
}
