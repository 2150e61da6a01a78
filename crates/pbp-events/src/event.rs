//! Event Types
//!
//! The closed set of things a game driver can report. Every variant maps to one
//! `"type"` tag on the wire; the payload fields are fixed per tag.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::field::{
    BaseReached, BasesTaken, Direction, Distance, FieldError, HitOutcome, OccupiedBase, PlayerId,
    Runner, ScoreType, Scorers, Speed, TeamNum,
};

/// Conventional stat keys used by the game driver.
///
/// The key space is open; these are the names the box score understands.
pub mod stat_keys {
    /// Plate appearance
    pub const PLATE_APPEARANCES: &str = "pa";
    /// Official at-bat
    pub const AT_BATS: &str = "ab";
    /// Run scored
    pub const RUNS: &str = "r";
    /// Hit
    pub const HITS: &str = "h";
    /// Double
    pub const DOUBLES: &str = "2b";
    /// Triple
    pub const TRIPLES: &str = "3b";
    /// Home run
    pub const HOME_RUNS: &str = "hr";
    /// Run batted in
    pub const RUNS_BATTED_IN: &str = "rbi";
    /// Walk drawn
    pub const WALKS: &str = "bb";
    /// Strikeout
    pub const STRIKEOUTS: &str = "so";
    /// Stolen base
    pub const STOLEN_BASES: &str = "sb";
    /// Caught stealing
    pub const CAUGHT_STEALING: &str = "cs";
    /// Pitch thrown
    pub const PITCHES: &str = "pc";
    /// Outs recorded while pitching
    pub const OUTS_PITCHED: &str = "outs";
    /// Earned run allowed
    pub const EARNED_RUNS: &str = "er";
    /// Error committed in the field
    pub const ERRORS: &str = "e";
    /// Putout
    pub const PUTOUTS: &str = "po";
    /// Fielding assist
    pub const ASSISTS: &str = "a";
}

/// A player suffered an injury during play.
///
/// Carries one display `name` and `injuredPid` on the wire, not a list of
/// names and `injuredPID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Injury {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub name: String,
    pub injured_pid: PlayerId,
}

/// A batter stepped into the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateAppearance {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
}

/// A pitch was thrown. `team` is the pitcher's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pitch {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
    pub pitch_type: String,
}

/// A bunt, grounder or line drive leaving the bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattedBall {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
    pub direction: Direction,
    pub speed: Speed,
}

/// A fly ball leaving the bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlyBall {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
    pub direction: Direction,
    pub distance: Distance,
}

/// How a ball in play was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitResult {
    pub result: HitOutcome,
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
    /// Fielder charged with an error, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_error: Option<PlayerId>,
    /// Fielding positions that handled the ball, e.g. `[6, 4, 3]`
    #[serde(default)]
    pub pos_defense: Vec<u8>,
    #[serde(default)]
    pub runners: Vec<Runner>,
    pub num_bases: BasesTaken,
    /// The batter was thrown out trying for one more base
    pub out_at_next_base: bool,
}

/// Runners moved up without a ball in play (walk or balk).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnersAdvance {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
    #[serde(default)]
    pub runners: Vec<Runner>,
}

/// A runner broke for the next base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealStart {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
    pub from: OccupiedBase,
}

/// A steal attempt was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StealEnd {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_error: Option<PlayerId>,
    pub from: OccupiedBase,
    pub to: BaseReached,
    pub out: bool,
    pub out_at_next_base: bool,
    #[serde(default)]
    pub runners: Vec<Runner>,
}

/// A run scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPlay {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub players: Scorers,
    pub score_type: ScoreType,
}

/// A numeric stat delta. `pid` is `None` for team-level stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatChange {
    #[serde(rename = "t")]
    pub team: TeamNum,
    #[serde(default)]
    pub pid: Option<PlayerId>,
    #[serde(rename = "s")]
    pub stat: String,
    #[serde(rename = "amt")]
    pub amount: f64,
}

impl StatChange {
    pub fn new(
        team: TeamNum,
        pid: Option<PlayerId>,
        stat: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            team,
            pid,
            stat: stat.into(),
            amount,
        }
    }
}

/// Every occurrence a game driver can report.
///
/// Serialized with an internal `"type"` tag:
///
/// ```
/// use pbp_events::{EventKind, PlateAppearance, TeamNum};
///
/// let event = EventKind::PlateAppearance(PlateAppearance { team: TeamNum::Home, pid: 7 });
/// assert_eq!(
///     serde_json::to_string(&event).unwrap(),
///     r#"{"type":"plateAppearance","t":0,"pid":7}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    /// A numbered inning begins. Innings are numbered from 1.
    InningStart { number: NonZeroU32 },
    /// The game goes one inning past the last one
    ExtraInning,
    /// Three outs; the half-inning is over. No payload: the inning is on the
    /// stamped record, not repeated in the event.
    SideOver,
    /// Both halves of the inning are over. No payload, like `sideOver`.
    InningOver,
    GameOver,
    Injury(Injury),
    PlateAppearance(PlateAppearance),
    Pitch(Pitch),
    Bunt(BattedBall),
    Ground(BattedBall),
    Line(BattedBall),
    Fly(FlyBall),
    HitResult(HitResult),
    Walk(RunnersAdvance),
    StealStart(StealStart),
    StealEnd(StealEnd),
    Balk(RunnersAdvance),
    Score(ScoringPlay),
    Stat(StatChange),
}

/// Fieldless mirror of [`EventKind`] for filtering and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventTag {
    InningStart,
    ExtraInning,
    SideOver,
    InningOver,
    GameOver,
    Injury,
    PlateAppearance,
    Pitch,
    Bunt,
    Ground,
    Line,
    Fly,
    HitResult,
    Walk,
    StealStart,
    StealEnd,
    Balk,
    Score,
    Stat,
}

impl EventTag {
    /// Returns all tags in declaration order.
    pub fn all() -> &'static [EventTag] {
        &[
            EventTag::InningStart,
            EventTag::ExtraInning,
            EventTag::SideOver,
            EventTag::InningOver,
            EventTag::GameOver,
            EventTag::Injury,
            EventTag::PlateAppearance,
            EventTag::Pitch,
            EventTag::Bunt,
            EventTag::Ground,
            EventTag::Line,
            EventTag::Fly,
            EventTag::HitResult,
            EventTag::Walk,
            EventTag::StealStart,
            EventTag::StealEnd,
            EventTag::Balk,
            EventTag::Score,
            EventTag::Stat,
        ]
    }
}

/// How an event moves the inning counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningChange {
    /// Jump to this inning number
    Set(u32),
    /// Move to the next inning
    Advance,
}

impl EventKind {
    /// Returns the wire tag of this event.
    pub fn tag(&self) -> EventTag {
        match self {
            EventKind::InningStart { .. } => EventTag::InningStart,
            EventKind::ExtraInning => EventTag::ExtraInning,
            EventKind::SideOver => EventTag::SideOver,
            EventKind::InningOver => EventTag::InningOver,
            EventKind::GameOver => EventTag::GameOver,
            EventKind::Injury(_) => EventTag::Injury,
            EventKind::PlateAppearance(_) => EventTag::PlateAppearance,
            EventKind::Pitch(_) => EventTag::Pitch,
            EventKind::Bunt(_) => EventTag::Bunt,
            EventKind::Ground(_) => EventTag::Ground,
            EventKind::Line(_) => EventTag::Line,
            EventKind::Fly(_) => EventTag::Fly,
            EventKind::HitResult(_) => EventTag::HitResult,
            EventKind::Walk(_) => EventTag::Walk,
            EventKind::StealStart(_) => EventTag::StealStart,
            EventKind::StealEnd(_) => EventTag::StealEnd,
            EventKind::Balk(_) => EventTag::Balk,
            EventKind::Score(_) => EventTag::Score,
            EventKind::Stat(_) => EventTag::Stat,
        }
    }

    /// True for the tag that feeds the scoring summary.
    pub fn is_scoring(&self) -> bool {
        matches!(self, EventKind::Score(_))
    }

    /// Returns how this event moves the inning counter, if at all.
    pub fn inning_change(&self) -> Option<InningChange> {
        match self {
            EventKind::InningStart { number } => Some(InningChange::Set(number.get())),
            EventKind::ExtraInning => Some(InningChange::Advance),
            _ => None,
        }
    }
}

/// Helper to create an inning start; inning numbers start at 1.
pub fn inning_start(number: u32) -> Result<EventKind, FieldError> {
    NonZeroU32::new(number)
        .map(|number| EventKind::InningStart { number })
        .ok_or(FieldError::InvalidInning)
}

/// Helper to create a plate appearance event.
pub fn plate_appearance(team: TeamNum, pid: PlayerId) -> EventKind {
    EventKind::PlateAppearance(PlateAppearance { team, pid })
}

/// Helper to create a stat event.
pub fn stat(team: TeamNum, pid: Option<PlayerId>, key: impl Into<String>, amount: f64) -> EventKind {
    EventKind::Stat(StatChange::new(team, pid, key, amount))
}

/// Helper to create a scoring play credited to a single player.
pub fn solo_score(
    team: TeamNum,
    pid: PlayerId,
    name: impl Into<String>,
    score_type: ScoreType,
) -> EventKind {
    EventKind::Score(ScoringPlay {
        team,
        players: Scorers::solo(crate::ScoringPlayer::new(pid, name)),
        score_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tags_serialization() {
        assert_eq!(serde_json::to_string(&EventKind::GameOver).unwrap(), r#"{"type":"gameOver"}"#);
        assert_eq!(
            serde_json::to_string(&EventKind::ExtraInning).unwrap(),
            r#"{"type":"extraInning"}"#
        );
        assert_eq!(
            serde_json::to_string(&inning_start(4).unwrap()).unwrap(),
            r#"{"type":"inningStart","number":4}"#
        );
    }

    #[test]
    fn test_stat_wire_format() {
        let event = stat(TeamNum::Home, Some(7), "pa", 1.0);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"stat","t":0,"pid":7,"s":"pa","amt":1.0}"#);

        let team_level: EventKind =
            serde_json::from_str(r#"{"type":"stat","t":1,"pid":null,"s":"lob","amt":-1}"#).unwrap();
        match team_level {
            EventKind::Stat(change) => {
                assert_eq!(change.team, TeamNum::Away);
                assert_eq!(change.pid, None);
                assert_eq!(change.amount, -1.0);
            }
            other => panic!("expected stat, got {:?}", other),
        }
    }

    #[test]
    fn test_batted_ball_deserialization() {
        let fly: EventKind = serde_json::from_str(
            r#"{"type":"fly","t":1,"pid":22,"direction":"left","distance":"deep"}"#,
        )
        .unwrap();
        assert_eq!(
            fly,
            EventKind::Fly(FlyBall {
                team: TeamNum::Away,
                pid: 22,
                direction: Direction::Left,
                distance: Distance::Deep,
            })
        );

        let ground: EventKind = serde_json::from_str(
            r#"{"type":"ground","t":0,"pid":5,"direction":"middle","speed":"soft"}"#,
        )
        .unwrap();
        assert_eq!(ground.tag(), EventTag::Ground);
    }

    #[test]
    fn test_mixed_fields_rejected() {
        // A fly ball carries a distance, never a speed.
        let bad = r#"{"type":"fly","t":1,"pid":22,"direction":"left","speed":"hard"}"#;
        assert!(serde_json::from_str::<EventKind>(bad).is_err());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!(serde_json::from_str::<EventKind>(r#"{"type":"quarter","quarter":2}"#).is_err());
        assert!(serde_json::from_str::<EventKind>(r#"{"type":"init","boxScore":{}}"#).is_err());
    }

    #[test]
    fn test_hit_result_wire_format() {
        let json = r#"{
            "type": "hitResult",
            "result": "hit",
            "t": 0,
            "pid": 7,
            "posDefense": [8],
            "runners": [{"pid": 3, "from": 1, "to": 3, "out": false}],
            "numBases": 2,
            "outAtNextBase": false
        }"#;
        let event: EventKind = serde_json::from_str(json).unwrap();
        match &event {
            EventKind::HitResult(hit) => {
                assert_eq!(hit.result, HitOutcome::Hit);
                assert_eq!(hit.num_bases, BasesTaken::Double);
                assert_eq!(hit.pid_error, None);
                assert!(hit.runners[0].scored());
            }
            other => panic!("expected hitResult, got {:?}", other),
        }

        let out = serde_json::to_string(&event).unwrap();
        assert!(out.contains(r#""numBases":2"#));
        assert!(!out.contains("pidError"));
    }

    #[test]
    fn test_score_wire_format() {
        let event = solo_score(TeamNum::Home, 7, "Ada Reyes", ScoreType::HomeRun);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"score","t":0,"players":[{"pid":7,"name":"Ada Reyes"}],"scoreType":"homeRun"}"#
        );
        assert!(event.is_scoring());
    }

    #[test]
    fn test_inning_change() {
        assert_eq!(
            inning_start(3).unwrap().inning_change(),
            Some(InningChange::Set(3))
        );
        assert_eq!(EventKind::ExtraInning.inning_change(), Some(InningChange::Advance));
        assert_eq!(EventKind::SideOver.inning_change(), None);
        assert_eq!(EventKind::InningOver.inning_change(), None);
        assert_eq!(plate_appearance(TeamNum::Home, 1).inning_change(), None);
    }

    #[test]
    fn test_tag_all_variants() {
        let all = EventTag::all();
        assert_eq!(all.len(), 19);
        assert!(all.contains(&EventTag::Score));
        assert!(all.contains(&EventTag::Stat));
    }

    #[test]
    fn test_inning_zero_rejected() {
        assert_eq!(inning_start(0), Err(FieldError::InvalidInning));
        let zero = r#"{"type":"inningStart","number":0}"#;
        assert!(serde_json::from_str::<EventKind>(zero).is_err());

        let first: EventKind = serde_json::from_str(r#"{"type":"inningStart","number":1}"#).unwrap();
        assert_eq!(first.inning_change(), Some(InningChange::Set(1)));
    }

    #[test]
    fn test_steal_base_domains() {
        let from_home = r#"{"type":"stealStart","t":0,"pid":1,"from":3}"#;
        assert!(serde_json::from_str::<EventKind>(from_home).is_err());

        let steal: EventKind =
            serde_json::from_str(r#"{"type":"stealStart","t":0,"pid":1,"from":2}"#).unwrap();
        assert_eq!(
            steal,
            EventKind::StealStart(StealStart {
                team: TeamNum::Home,
                pid: 1,
                from: OccupiedBase::Third,
            })
        );

        let back_to_first = r#"{"type":"stealEnd","t":1,"pid":14,"from":0,"to":0,"out":false,"outAtNextBase":false,"runners":[]}"#;
        assert!(serde_json::from_str::<EventKind>(back_to_first).is_err());

        let bad_runner = r#"{"type":"walk","t":1,"pid":3,"runners":[{"pid":4,"from":3,"to":3,"out":false}]}"#;
        assert!(serde_json::from_str::<EventKind>(bad_runner).is_err());
    }
}
