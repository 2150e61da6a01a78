//! Shared event types for baseball play-by-play.
//!
//! This crate contains pure data structures with no recording logic. A game
//! driver builds [`EventKind`] values; the recorder stamps them into
//! [`StampedEvent`]s; consumers read [`PlayByPlayEntry`] sequences.

pub mod event;
pub mod field;
pub mod record;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export field types
pub use field::{
    Base, BaseReached, BasesTaken, Direction, Distance, FieldError, HitOutcome, OccupiedBase,
    PlayerId, Runner, ScoreType, Scorers, ScoringPlayer, Speed, TeamNum, MAX_SCORERS,
};

// Re-export event types
pub use event::*;

// Re-export record types
pub use record::{InitRecord, InitTag, PlayByPlayEntry, StampedEvent};
