//! Stamped Records
//!
//! What ends up in a play-by-play log: the driver's event plus the inning the
//! recorder stamped on it, and the synthesized `init` entry that opens an
//! exported log.

use serde::{Deserialize, Serialize};

use crate::event::{EventKind, EventTag};

/// An event as stored in the log, stamped with the inning it happened in.
///
/// The event's fields are flattened next to `inning`:
///
/// ```
/// use pbp_events::{plate_appearance, StampedEvent, TeamNum};
///
/// let record = StampedEvent::new(2, plate_appearance(TeamNum::Away, 11));
/// assert_eq!(
///     record.to_jsonl().unwrap(),
///     r#"{"inning":2,"type":"plateAppearance","t":1,"pid":11}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampedEvent {
    /// Inning counter at the moment the event was logged (starts at 1)
    pub inning: u32,
    #[serde(flatten)]
    pub event: EventKind,
}

impl StampedEvent {
    pub fn new(inning: u32, event: EventKind) -> Self {
        Self { inning, event }
    }

    /// Returns the wire tag of the wrapped event.
    pub fn tag(&self) -> EventTag {
        self.event.tag()
    }

    /// True if this record belongs in the scoring summary.
    pub fn is_scoring(&self) -> bool {
        self.event.is_scoring()
    }

    /// Serializes the record to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Marker serialized as the `"type"` of the init entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitTag {
    #[serde(rename = "init")]
    Init,
}

/// The synthesized first entry of an exported log.
///
/// Carries the consumer's box score so a reader starting from scratch has the
/// game context before the first real event. Never stored in the log itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRecord<B> {
    #[serde(rename = "type")]
    pub tag: InitTag,
    pub box_score: B,
}

/// One element of an exported play-by-play.
///
/// The box score type `B` is opaque here; it is only carried through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayByPlayEntry<B> {
    Init(InitRecord<B>),
    Event(StampedEvent),
}

impl<B> PlayByPlayEntry<B> {
    /// Creates the init entry for a box score.
    pub fn init(box_score: B) -> Self {
        PlayByPlayEntry::Init(InitRecord {
            tag: InitTag::Init,
            box_score,
        })
    }

    /// Returns the box score if this is the init entry.
    pub fn box_score(&self) -> Option<&B> {
        match self {
            PlayByPlayEntry::Init(init) => Some(&init.box_score),
            PlayByPlayEntry::Event(_) => None,
        }
    }

    /// Returns the stamped record if this is a logged event.
    pub fn as_event(&self) -> Option<&StampedEvent> {
        match self {
            PlayByPlayEntry::Init(_) => None,
            PlayByPlayEntry::Event(record) => Some(record),
        }
    }

    pub fn is_init(&self) -> bool {
        matches!(self, PlayByPlayEntry::Init(_))
    }
}

impl<B> From<StampedEvent> for PlayByPlayEntry<B> {
    fn from(record: StampedEvent) -> Self {
        PlayByPlayEntry::Event(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{plate_appearance, stat};
    use crate::field::TeamNum;
    use serde_json::{json, Value};

    #[test]
    fn test_stamped_event_roundtrip() {
        let record = StampedEvent::new(3, stat(TeamNum::Home, None, "lob", 2.0));
        let line = record.to_jsonl().unwrap();
        assert!(line.starts_with(r#"{"inning":3,"type":"stat""#));

        let parsed = StampedEvent::from_jsonl(&line).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.tag(), EventTag::Stat);
    }

    #[test]
    fn test_unit_variant_stamped() {
        let parsed = StampedEvent::from_jsonl(r#"{"inning":9,"type":"gameOver"}"#).unwrap();
        assert_eq!(parsed.inning, 9);
        assert_eq!(parsed.event, EventKind::GameOver);
    }

    #[test]
    fn test_stamped_event_requires_inning() {
        assert!(StampedEvent::from_jsonl(r#"{"type":"gameOver"}"#).is_err());
    }

    #[test]
    fn test_init_entry_serialization() {
        let entry: PlayByPlayEntry<Value> = PlayByPlayEntry::init(json!({"final": true}));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"type": "init", "boxScore": {"final": true}})
        );
        assert!(entry.is_init());
        assert_eq!(entry.box_score(), Some(&json!({"final": true})));
        assert!(entry.as_event().is_none());
    }

    #[test]
    fn test_entry_deserialization_distinguishes_init() {
        let entries: Vec<PlayByPlayEntry<Value>> = serde_json::from_str(
            r#"[
                {"type": "init", "boxScore": {"teams": []}},
                {"inning": 1, "type": "plateAppearance", "t": 0, "pid": 7}
            ]"#,
        )
        .unwrap();

        assert!(entries[0].is_init());
        assert_eq!(
            entries[1].as_event(),
            Some(&StampedEvent::new(1, plate_appearance(TeamNum::Home, 7)))
        );
    }
}
