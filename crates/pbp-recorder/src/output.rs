//! Writing and reading recorder output files.
//!
//! A finished game is written to a directory:
//! - `play_by_play.json` - init entry plus every stamped record (active recorders only)
//! - `events.jsonl` - the raw stamped log, one record per line
//! - `summary.json` - line score, scoring plays and stat totals
//! - `narration.txt` - plain-text narration (optional)

use pbp_events::{PlayByPlayEntry, StampedEvent};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::narrate::Narrator;
use crate::recorder::PlayByPlayRecorder;
use crate::summary::GameSummary;

pub const PLAY_BY_PLAY_FILE: &str = "play_by_play.json";
pub const EVENTS_FILE: &str = "events.jsonl";
pub const SUMMARY_FILE: &str = "summary.json";
pub const NARRATION_FILE: &str = "narration.txt";

/// Errors that can occur during output operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which files a call to [`OutputWriter::write_game`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenFiles {
    pub play_by_play: Option<PathBuf>,
    pub events: PathBuf,
    pub summary: PathBuf,
    pub narration: Option<PathBuf>,
}

/// Writes a recorder's output files into one directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
    pretty: bool,
}

impl OutputWriter {
    /// Creates a writer for the given directory, creating it if needed.
    pub fn new(output_dir: &Path) -> Result<Self, OutputError> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            pretty: true,
        })
    }

    /// Sets whether JSON files are pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Writes every output file for a finished game.
    ///
    /// The play-by-play file is skipped when the recorder is inactive.
    pub fn write_game<B: Serialize>(
        &self,
        recorder: &PlayByPlayRecorder,
        box_score: B,
        narrate: bool,
    ) -> Result<WrittenFiles, OutputError> {
        let play_by_play = match recorder.play_by_play(box_score) {
            Some(entries) => Some(self.write_play_by_play(&entries)?),
            None => {
                info!("recorder inactive, play-by-play not written");
                None
            }
        };

        let events = self.write_events(recorder.events())?;
        let summary = self.write_summary(&recorder.summary())?;
        let narration = if narrate {
            let lines = Narrator::new().narrate(recorder.events());
            Some(self.write_narration(&lines)?)
        } else {
            None
        };

        Ok(WrittenFiles {
            play_by_play,
            events,
            summary,
            narration,
        })
    }

    /// Writes an exported play-by-play as a JSON array.
    pub fn write_play_by_play<B: Serialize>(
        &self,
        entries: &[PlayByPlayEntry<B>],
    ) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(PLAY_BY_PLAY_FILE);
        write_json(&path, entries, self.pretty)?;
        info!(path = %path.display(), entries = entries.len(), "wrote play-by-play");
        Ok(path)
    }

    /// Writes stamped records in JSON Lines format.
    pub fn write_events(&self, records: &[StampedEvent]) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(EVENTS_FILE);
        write_jsonl(&path, records)?;
        info!(path = %path.display(), records = records.len(), "wrote event log");
        Ok(path)
    }

    /// Writes the game summary.
    pub fn write_summary(&self, summary: &GameSummary) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(SUMMARY_FILE);
        write_json(&path, summary, self.pretty)?;
        info!(path = %path.display(), "wrote summary");
        Ok(path)
    }

    /// Writes narration lines, one per line.
    pub fn write_narration(&self, lines: &[String]) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(NARRATION_FILE);
        let mut writer = BufWriter::new(File::create(&path)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        info!(path = %path.display(), lines = lines.len(), "wrote narration");
        Ok(path)
    }
}

/// Writes any serializable value as JSON.
pub fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> Result<(), OutputError> {
    let writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

/// Writes stamped records one per line.
pub fn write_jsonl(path: &Path, records: &[StampedEvent]) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(writer, "{}", record.to_jsonl()?)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads stamped records from a JSON Lines file, skipping blank lines.
pub fn read_jsonl(path: &Path) -> Result<Vec<StampedEvent>, OutputError> {
    let content = fs::read_to_string(path)?;
    let mut records = Vec::new();

    for line in content.lines() {
        if !line.trim().is_empty() {
            records.push(StampedEvent::from_jsonl(line)?);
        }
    }

    Ok(records)
}

/// Reads an exported play-by-play back from a JSON array.
pub fn read_play_by_play<B: DeserializeOwned>(
    path: &Path,
) -> Result<Vec<PlayByPlayEntry<B>>, OutputError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Reads a game summary back.
pub fn read_summary(path: &Path) -> Result<GameSummary, OutputError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
