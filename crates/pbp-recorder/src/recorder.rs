//! Play-by-play recording.
//!
//! The recorder is the single stateful piece of a game's logging: it stamps each
//! driver event with the current inning, keeps the ordered log and the scoring
//! summary, and exports the log behind a synthesized init entry.

use pbp_events::{
    EventKind, InningChange, PlayByPlayEntry, PlayerId, StampedEvent, StatChange, TeamNum,
};
use tracing::{debug, trace, warn};

use crate::config::RecorderConfig;
use crate::summary::{GameSummary, LineScore, StatTotals};

/// Inning the counter starts at.
pub const FIRST_INNING: u32 = 1;

/// Records one game's events in call order.
///
/// One recorder per game, owned by the game driver. `active` is fixed at
/// construction:
/// - [`log_event`](Self::log_event) always appends, whatever `active` says
/// - [`log_stat`](Self::log_stat) is a no-op when inactive
/// - [`play_by_play`](Self::play_by_play) returns `None` when inactive
#[derive(Debug, Clone)]
pub struct PlayByPlayRecorder {
    active: bool,
    inning: u32,
    log: Vec<StampedEvent>,
    scoring_summary: Vec<StampedEvent>,
    game_over: bool,
}

impl PlayByPlayRecorder {
    /// Creates a recorder starting in the first inning.
    pub fn new(active: bool) -> Self {
        Self {
            active,
            inning: FIRST_INNING,
            log: Vec::new(),
            scoring_summary: Vec::new(),
            game_over: false,
        }
    }

    /// Creates a recorder using the `[recorder]` section of a configuration.
    pub fn from_config(config: &RecorderConfig) -> Self {
        Self::new(config.recorder.active)
    }

    /// Whether stat logging and export are enabled.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current inning counter.
    pub fn inning(&self) -> u32 {
        self.inning
    }

    /// True once a `gameOver` event has been logged.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// All stamped records in call order.
    pub fn events(&self) -> &[StampedEvent] {
        &self.log
    }

    /// Scoring records in the order they were logged.
    pub fn scoring_summary(&self) -> &[StampedEvent] {
        &self.scoring_summary
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Stamps `event` with the current inning and appends it to the log.
    ///
    /// `inningStart` sets the counter to its number and `extraInning` bumps it
    /// by one before stamping, so both carry the inning they open. Scoring
    /// events are also appended to the scoring summary.
    pub fn log_event(&mut self, event: EventKind) {
        if let Some(change) = event.inning_change() {
            self.apply_inning_change(change);
        }

        if self.game_over {
            debug!(tag = ?event.tag(), "event logged after game over");
        }
        if matches!(event, EventKind::GameOver) {
            self.game_over = true;
            debug!(inning = self.inning, events = self.log.len() + 1, "game over");
        }

        let record = StampedEvent::new(self.inning, event);
        trace!(inning = record.inning, tag = ?record.tag(), "event logged");

        if record.is_scoring() {
            self.scoring_summary.push(record.clone());
        }
        self.log.push(record);
    }

    /// Appends a stat delta, or does nothing when the recorder is inactive.
    ///
    /// `pid` is `None` for team-level stats. Negative amounts are corrections.
    pub fn log_stat(
        &mut self,
        team: TeamNum,
        pid: Option<PlayerId>,
        stat: impl Into<String>,
        amount: f64,
    ) {
        if !self.active {
            return;
        }

        let change = StatChange::new(team, pid, stat, amount);
        trace!(inning = self.inning, stat = %change.stat, amount, "stat logged");
        self.log
            .push(StampedEvent::new(self.inning, EventKind::Stat(change)));
    }

    /// Exports the log behind an init entry carrying `box_score`.
    ///
    /// Returns `None` when the recorder is inactive. The box score is passed
    /// through untouched. Every call builds a fresh vector; the log is not
    /// modified.
    pub fn play_by_play<B>(&self, box_score: B) -> Option<Vec<PlayByPlayEntry<B>>> {
        if !self.active {
            return None;
        }

        let mut entries = Vec::with_capacity(self.log.len() + 1);
        entries.push(PlayByPlayEntry::init(box_score));
        entries.extend(self.log.iter().cloned().map(PlayByPlayEntry::Event));
        Some(entries)
    }

    /// Builds the summary view of the game so far.
    ///
    /// Available whether or not the recorder is active, since scoring events
    /// come through [`log_event`](Self::log_event). Stat lines only include
    /// what was actually logged.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            final_inning: self.inning,
            game_over: self.game_over,
            line_score: LineScore::from_scoring(&self.scoring_summary).padded_to(self.inning),
            scoring_plays: self.scoring_summary.clone(),
            stats: StatTotals::from_events(&self.log).lines(),
        }
    }

    fn apply_inning_change(&mut self, change: InningChange) {
        let next = match change {
            InningChange::Set(number) => number,
            InningChange::Advance => self.inning.saturating_add(1),
        };

        if next < self.inning {
            warn!(from = self.inning, to = next, "inning counter moved backwards");
        }

        debug!(from = self.inning, to = next, "inning change");
        self.inning = next;
    }
}
