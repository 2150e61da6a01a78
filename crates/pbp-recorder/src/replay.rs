//! Replaying an exported play-by-play.
//!
//! A consumer that only has the exported sequence (for example one read back
//! from disk) rebuilds the game state from it here: the init entry gives the
//! starting box score, and the stamped records are folded in order.

use pbp_events::{EventKind, PlayByPlayEntry, StampedEvent};
use thiserror::Error;

use crate::recorder::FIRST_INNING;
use crate::summary::{LineScore, StatTotals};

/// Why an exported sequence cannot be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("play-by-play does not start with an init entry")]
    MissingInit,
    #[error("unexpected init entry at position {0}")]
    MisplacedInit(usize),
}

/// Game state rebuilt from an exported play-by-play.
#[derive(Debug, Clone)]
pub struct Replay<'a, B> {
    /// Box score carried by the init entry
    pub box_score: &'a B,
    /// Stamped records after the init entry, in order
    pub events: Vec<&'a StampedEvent>,
    /// Inning of the last record (first inning for an empty log)
    pub final_inning: u32,
    pub game_over: bool,
    pub line_score: LineScore,
    pub stats: StatTotals,
}

impl<'a, B> Replay<'a, B> {
    /// Scoring records in log order.
    pub fn scoring_plays(&self) -> impl Iterator<Item = &'a StampedEvent> + '_ {
        self.events.iter().copied().filter(|r| r.is_scoring())
    }
}

/// Replays an exported play-by-play from its first entry.
pub fn replay<B>(entries: &[PlayByPlayEntry<B>]) -> Result<Replay<'_, B>, ReplayError> {
    let (first, rest) = entries.split_first().ok_or(ReplayError::MissingInit)?;
    let box_score = first.box_score().ok_or(ReplayError::MissingInit)?;

    let mut replay = Replay {
        box_score,
        events: Vec::with_capacity(rest.len()),
        final_inning: FIRST_INNING,
        game_over: false,
        line_score: LineScore::default(),
        stats: StatTotals::new(),
    };

    for (offset, entry) in rest.iter().enumerate() {
        let record = entry
            .as_event()
            .ok_or(ReplayError::MisplacedInit(offset + 1))?;

        replay.final_inning = record.inning;
        match &record.event {
            EventKind::Score(play) => replay.line_score.add_run(play.team, record.inning),
            EventKind::Stat(change) => replay.stats.add(change),
            EventKind::GameOver => replay.game_over = true,
            _ => {}
        }
        replay.events.push(record);
    }

    replay.line_score = replay.line_score.padded_to(replay.final_inning);
    Ok(replay)
}
