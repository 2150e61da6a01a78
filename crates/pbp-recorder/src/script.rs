//! Game scripts: driver events stored as JSON Lines.
//!
//! Each non-blank line is one [`EventKind`] without an inning stamp. Feeding a
//! script through a recorder reproduces the calls a live game driver would
//! make.

use pbp_events::EventKind;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::recorder::PlayByPlayRecorder;

/// Errors that can occur while reading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a script file.
pub fn read_script(path: &Path) -> Result<Vec<EventKind>, ScriptError> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

/// Parses script text, skipping blank lines. Line numbers in errors are 1-based.
pub fn parse_script(content: &str) -> Result<Vec<EventKind>, ScriptError> {
    let mut events = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| ScriptError::Json {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }

    debug!(events = events.len(), "parsed script");
    Ok(events)
}

/// Feeds driver events through a recorder in order.
///
/// Stat events go through [`PlayByPlayRecorder::log_stat`] so they are
/// dropped by an inactive recorder; everything else is logged as an event.
pub fn feed(recorder: &mut PlayByPlayRecorder, events: impl IntoIterator<Item = EventKind>) {
    for event in events {
        match event {
            EventKind::Stat(change) => {
                recorder.log_stat(change.team, change.pid, change.stat, change.amount)
            }
            other => recorder.log_event(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbp_events::{EventTag, TeamNum};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCRIPT: &str = r#"{"type":"inningStart","number":1}
{"type":"plateAppearance","t":1,"pid":21}

{"type":"stat","t":1,"pid":21,"s":"pa","amt":1}
{"type":"gameOver"}
"#;

    #[test]
    fn test_parse_script_skips_blank_lines() {
        let events = parse_script(SCRIPT).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[1].tag(), EventTag::PlateAppearance);
        assert_eq!(events[3].tag(), EventTag::GameOver);
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("{\"type\":\"gameOver\"}\n\n{\"type\":\"touchdown\"}\n").unwrap_err();
        assert!(matches!(err, ScriptError::Json { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3:"));
    }

    #[test]
    fn test_parse_script_rejects_out_of_range_values() {
        let zero_inning = r#"{"type":"inningStart","number":0}"#;
        assert!(matches!(
            parse_script(zero_inning),
            Err(ScriptError::Json { line: 1, .. })
        ));

        let steal_from_home = r#"{"type":"gameOver"}
{"type":"stealStart","t":0,"pid":1,"from":3}"#;
        assert!(matches!(
            parse_script(steal_from_home),
            Err(ScriptError::Json { line: 2, .. })
        ));
    }

    #[test]
    fn test_feed_routes_stats() {
        let events = parse_script(SCRIPT).unwrap();

        let mut active = PlayByPlayRecorder::new(true);
        feed(&mut active, events.clone());
        assert_eq!(active.len(), 4);
        assert!(active.is_game_over());

        let mut inactive = PlayByPlayRecorder::new(false);
        feed(&mut inactive, events);
        assert_eq!(inactive.len(), 3);
        assert!(inactive
            .events()
            .iter()
            .all(|r| r.tag() != EventTag::Stat));
    }

    #[test]
    fn test_read_script_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SCRIPT).unwrap();

        let events = read_script(file.path()).unwrap();
        let mut recorder = PlayByPlayRecorder::new(true);
        feed(&mut recorder, events);

        let summary = recorder.summary();
        let pa = summary
            .stats
            .iter()
            .find(|line| line.team == TeamNum::Away && line.pid == Some(21))
            .map(|line| line.total);
        assert_eq!(pa, Some(1.0));
    }

    #[test]
    fn test_read_missing_script() {
        let result = read_script(Path::new("/nonexistent/game.jsonl"));
        assert!(matches!(result, Err(ScriptError::Io(_))));
    }
}
