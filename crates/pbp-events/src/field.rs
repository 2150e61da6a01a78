//! Field Value Types
//!
//! Small value types shared by the event payloads: teams, bases, batted-ball
//! categories and the scorer list of a scoring play.
//!
//! Numeric wire values (teams, bases, bases taken) are checked when they are
//! deserialized, so an out-of-domain number never reaches the recorder.
//!
//! # Example
//!
//! ```
//! use pbp_events::{Base, TeamNum};
//!
//! assert_eq!(TeamNum::try_from(1).unwrap(), TeamNum::Away);
//! assert_eq!(serde_json::to_string(&Base::Home).unwrap(), "3");
//! assert!(Base::try_from(4).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Player identifier assigned by the league.
pub type PlayerId = u32;

/// Maximum number of players credited on a single scoring play.
pub const MAX_SCORERS: usize = 3;

/// Which side of the game a record belongs to.
///
/// Serialized as `0` (home) or `1` (away).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamNum {
    Home,
    Away,
}

impl TeamNum {
    /// Index into per-team arrays.
    pub fn index(self) -> usize {
        match self {
            TeamNum::Home => 0,
            TeamNum::Away => 1,
        }
    }
}

impl TryFrom<u8> for TeamNum {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TeamNum::Home),
            1 => Ok(TeamNum::Away),
            other => Err(FieldError::InvalidTeam(other)),
        }
    }
}

impl From<TeamNum> for u8 {
    fn from(team: TeamNum) -> Self {
        match team {
            TeamNum::Home => 0,
            TeamNum::Away => 1,
        }
    }
}

impl fmt::Display for TeamNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamNum::Home => write!(f, "home"),
            TeamNum::Away => write!(f, "away"),
        }
    }
}

/// A base on the diamond, indexed from first.
///
/// Runner movements use the narrower [`OccupiedBase`] and [`BaseReached`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Base {
    First,
    Second,
    Third,
    Home,
}

impl TryFrom<u8> for Base {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Base::First),
            1 => Ok(Base::Second),
            2 => Ok(Base::Third),
            3 => Ok(Base::Home),
            other => Err(FieldError::InvalidBase(other)),
        }
    }
}

impl From<Base> for u8 {
    fn from(base: Base) -> Self {
        match base {
            Base::First => 0,
            Base::Second => 1,
            Base::Third => 2,
            Base::Home => 3,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::First => write!(f, "first"),
            Base::Second => write!(f, "second"),
            Base::Third => write!(f, "third"),
            Base::Home => write!(f, "home"),
        }
    }
}

/// A base a runner can start from. Serialized as `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OccupiedBase {
    First,
    Second,
    Third,
}

impl OccupiedBase {
    /// The base a runner advancing one station reaches.
    pub fn next(self) -> BaseReached {
        match self {
            OccupiedBase::First => BaseReached::Second,
            OccupiedBase::Second => BaseReached::Third,
            OccupiedBase::Third => BaseReached::Home,
        }
    }
}

impl TryFrom<u8> for OccupiedBase {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OccupiedBase::First),
            1 => Ok(OccupiedBase::Second),
            2 => Ok(OccupiedBase::Third),
            other => Err(FieldError::InvalidOccupiedBase(other)),
        }
    }
}

impl From<OccupiedBase> for Base {
    fn from(base: OccupiedBase) -> Self {
        match base {
            OccupiedBase::First => Base::First,
            OccupiedBase::Second => Base::Second,
            OccupiedBase::Third => Base::Third,
        }
    }
}

impl From<OccupiedBase> for u8 {
    fn from(base: OccupiedBase) -> Self {
        Base::from(base).into()
    }
}

impl fmt::Display for OccupiedBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Base::from(*self), f)
    }
}

/// A base a runner can be headed for. Serialized as `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BaseReached {
    Second,
    Third,
    Home,
}

impl TryFrom<u8> for BaseReached {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BaseReached::Second),
            2 => Ok(BaseReached::Third),
            3 => Ok(BaseReached::Home),
            other => Err(FieldError::InvalidBaseReached(other)),
        }
    }
}

impl From<BaseReached> for Base {
    fn from(base: BaseReached) -> Self {
        match base {
            BaseReached::Second => Base::Second,
            BaseReached::Third => Base::Third,
            BaseReached::Home => Base::Home,
        }
    }
}

impl From<BaseReached> for u8 {
    fn from(base: BaseReached) -> Self {
        Base::from(base).into()
    }
}

impl fmt::Display for BaseReached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Base::from(*self), f)
    }
}

/// How many bases the batter took on a hit. Serialized as `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BasesTaken {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl TryFrom<u8> for BasesTaken {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BasesTaken::Single),
            2 => Ok(BasesTaken::Double),
            3 => Ok(BasesTaken::Triple),
            4 => Ok(BasesTaken::HomeRun),
            other => Err(FieldError::InvalidBasesTaken(other)),
        }
    }
}

impl From<BasesTaken> for u8 {
    fn from(bases: BasesTaken) -> Self {
        match bases {
            BasesTaken::Single => 1,
            BasesTaken::Double => 2,
            BasesTaken::Triple => 3,
            BasesTaken::HomeRun => 4,
        }
    }
}

/// Field direction of a batted ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Left,
    Right,
    Middle,
}

/// Contact quality of a bunt, grounder or line drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Speed {
    Soft,
    Normal,
    Hard,
}

/// Carry of a fly ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Distance {
    Infield,
    Shallow,
    Normal,
    Deep,
}

/// Resolution of a ball in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HitOutcome {
    FlyOut,
    ThrowOut,
    FieldersChoice,
    Hit,
    Error,
}

/// How the run on a scoring play came in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreType {
    Hit,
    HomeRun,
    Walk,
    Steal,
    Balk,
    Error,
    FieldersChoice,
    Sacrifice,
}

/// One runner's movement on a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Runner {
    pub pid: PlayerId,
    pub from: OccupiedBase,
    pub to: BaseReached,
    pub out: bool,
}

impl Runner {
    /// Creates a runner that reached `to` safely.
    pub fn safe(pid: PlayerId, from: OccupiedBase, to: BaseReached) -> Self {
        Self {
            pid,
            from,
            to,
            out: false,
        }
    }

    /// Creates a runner that was put out on the way to `to`.
    pub fn thrown_out(pid: PlayerId, from: OccupiedBase, to: BaseReached) -> Self {
        Self {
            pid,
            from,
            to,
            out: true,
        }
    }

    /// True if the runner crossed the plate.
    pub fn scored(&self) -> bool {
        self.to == BaseReached::Home && !self.out
    }
}

/// A player credited on a scoring play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringPlayer {
    pub pid: PlayerId,
    pub name: String,
}

impl ScoringPlayer {
    pub fn new(pid: PlayerId, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
        }
    }
}

/// The scorer of a run followed by up to two players in the assist chain.
///
/// Always holds between one and [`MAX_SCORERS`] players.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScoringPlayer>", into = "Vec<ScoringPlayer>")]
pub struct Scorers(Vec<ScoringPlayer>);

impl Scorers {
    /// A play credited to a single player.
    pub fn solo(scorer: ScoringPlayer) -> Self {
        Self(vec![scorer])
    }

    /// Adds the next player in the assist chain.
    pub fn with_assist(mut self, assist: ScoringPlayer) -> Result<Self, FieldError> {
        if self.0.len() >= MAX_SCORERS {
            return Err(FieldError::ScorerCount(self.0.len() + 1));
        }
        self.0.push(assist);
        Ok(self)
    }

    /// The player who scored.
    pub fn scorer(&self) -> &ScoringPlayer {
        // Construction guarantees at least one entry.
        &self.0[0]
    }

    /// Players credited after the scorer.
    pub fn assists(&self) -> &[ScoringPlayer] {
        &self.0[1..]
    }

    /// All credited players, scorer first.
    pub fn players(&self) -> &[ScoringPlayer] {
        &self.0
    }
}

impl TryFrom<Vec<ScoringPlayer>> for Scorers {
    type Error = FieldError;

    fn try_from(players: Vec<ScoringPlayer>) -> Result<Self, Self::Error> {
        if players.is_empty() || players.len() > MAX_SCORERS {
            return Err(FieldError::ScorerCount(players.len()));
        }
        Ok(Self(players))
    }
}

impl From<Scorers> for Vec<ScoringPlayer> {
    fn from(scorers: Scorers) -> Self {
        scorers.0
    }
}

/// A wire value outside its field's domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid team number {0}, expected 0 or 1")]
    InvalidTeam(u8),
    #[error("invalid base index {0}, expected 0..=3")]
    InvalidBase(u8),
    #[error("invalid starting base {0}, expected 0..=2")]
    InvalidOccupiedBase(u8),
    #[error("invalid base reached {0}, expected 1..=3")]
    InvalidBaseReached(u8),
    #[error("invalid bases taken {0}, expected 1..=4")]
    InvalidBasesTaken(u8),
    #[error("inning numbers start at 1")]
    InvalidInning,
    #[error("a scoring play credits 1 to {MAX_SCORERS} players, got {0}")]
    ScorerCount(usize),
}
