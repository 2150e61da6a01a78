//! Sample data fixtures for testing.
//!
//! This module provides a ready-made driver script for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // pbp-events = { path = "../pbp-events", features = ["test-fixtures"] }
//!
//! use pbp_events::fixtures;
//!
//! let script = fixtures::sample_game();
//! ```

use crate::{EventKind, EventTag};

/// Raw JSONL of the sample game, one driver event per line.
pub const SAMPLE_GAME_JSONL: &str = include_str!("../tests/fixtures/sample_game.jsonl");

/// Returns the sample game as the driver emitted it.
///
/// A ten-inning game, home 3 away 2:
/// - away scores twice in the 1st (two-run homer)
/// - home scores twice in the 4th (triple, then a balk)
/// - innings 2, 3 and 5 through 8 are skipped by the driver
/// - the home side walks it off in the 10th after an `extraInning`
/// - 32 of the 78 lines are `stat` entries
pub fn sample_game() -> Vec<EventKind> {
    SAMPLE_GAME_JSONL
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            serde_json::from_str(l).unwrap_or_else(|e| {
                panic!("Failed to parse event line: {}\nError: {}", l, e)
            })
        })
        .collect()
}

/// Returns the sample game without its `stat` entries.
pub fn sample_narrative() -> Vec<EventKind> {
    sample_game()
        .into_iter()
        .filter(|e| e.tag() != EventTag::Stat)
        .collect()
}
