//! Box score views derived from a play-by-play log.
//!
//! Nothing here reads the driver's intent: runs come from scoring records
//! (one run each) and stat totals from `stat` records, summed as logged.

use pbp_events::{EventKind, PlayerId, StampedEvent, StatChange, TeamNum};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One team's row of the line score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLine {
    /// Runs keyed by inning; scoreless innings are absent
    pub runs_by_inning: BTreeMap<u32, u32>,
    pub total: u32,
}

/// Runs per inning per team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    /// Number of innings covered; innings without an entry are scoreless
    pub innings: u32,
    /// Rows indexed by [`TeamNum::index`]
    pub teams: [TeamLine; 2],
}

impl LineScore {
    /// Builds the line score from scoring records.
    ///
    /// Covers up to the latest inning that has a run.
    pub fn from_scoring<'a>(records: impl IntoIterator<Item = &'a StampedEvent>) -> Self {
        let mut line = LineScore::default();
        for record in records {
            if let EventKind::Score(play) = &record.event {
                line.add_run(play.team, record.inning);
            }
        }
        line
    }

    /// Extends the covered range to `innings`. Never shrinks it.
    pub fn padded_to(mut self, innings: u32) -> Self {
        self.innings = self.innings.max(innings);
        self
    }

    /// Credits one run to `team` in `inning`.
    pub fn add_run(&mut self, team: TeamNum, inning: u32) {
        let inning = inning.max(1);
        self.innings = self.innings.max(inning);
        let row = &mut self.teams[team.index()];
        *row.runs_by_inning.entry(inning).or_insert(0) += 1;
        row.total += 1;
    }

    /// Total runs for a team.
    pub fn total(&self, team: TeamNum) -> u32 {
        self.teams[team.index()].total
    }

    /// Runs for a team in a given inning (0 outside the covered range).
    pub fn runs(&self, team: TeamNum, inning: u32) -> u32 {
        self.teams[team.index()]
            .runs_by_inning
            .get(&inning)
            .copied()
            .unwrap_or(0)
    }

    /// The team with more runs, or `None` when tied.
    pub fn leader(&self) -> Option<TeamNum> {
        let home = self.total(TeamNum::Home);
        let away = self.total(TeamNum::Away);
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(TeamNum::Home),
            std::cmp::Ordering::Less => Some(TeamNum::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Key of a stat total: team, player (or `None` for team-level), stat key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct StatKey {
    team: TeamNum,
    pid: Option<PlayerId>,
    stat: String,
}

/// One summed stat, in the shape written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    #[serde(rename = "t")]
    pub team: TeamNum,
    pub pid: Option<PlayerId>,
    #[serde(rename = "s")]
    pub stat: String,
    pub total: f64,
}

/// Running sums of `stat` records.
#[derive(Debug, Clone, Default)]
pub struct StatTotals {
    totals: BTreeMap<StatKey, f64>,
}

impl StatTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums every `stat` record in `records`; other tags are skipped.
    pub fn from_events<'a>(records: impl IntoIterator<Item = &'a StampedEvent>) -> Self {
        let mut totals = Self::new();
        for record in records {
            if let EventKind::Stat(change) = &record.event {
                totals.add(change);
            }
        }
        totals
    }

    /// Adds one delta.
    pub fn add(&mut self, change: &StatChange) {
        let key = StatKey {
            team: change.team,
            pid: change.pid,
            stat: change.stat.clone(),
        };
        *self.totals.entry(key).or_insert(0.0) += change.amount;
    }

    /// Total for one player (or the team-level line when `pid` is `None`).
    pub fn get(&self, team: TeamNum, pid: Option<PlayerId>, stat: &str) -> f64 {
        let key = StatKey {
            team,
            pid,
            stat: stat.to_string(),
        };
        self.totals.get(&key).copied().unwrap_or(0.0)
    }

    /// Total across a team's players and its team-level line.
    pub fn team_total(&self, team: TeamNum, stat: &str) -> f64 {
        self.totals
            .iter()
            .filter(|(k, _)| k.team == team && k.stat == stat)
            .map(|(_, v)| *v)
            .sum()
    }

    /// Player ids with at least one stat for `team`, ascending.
    pub fn players(&self, team: TeamNum) -> Vec<PlayerId> {
        let mut pids: Vec<PlayerId> = self
            .totals
            .keys()
            .filter(|k| k.team == team)
            .filter_map(|k| k.pid)
            .collect();
        pids.dedup();
        pids
    }

    /// All totals ordered by team, player (team-level first) and stat key.
    pub fn lines(&self) -> Vec<StatLine> {
        self.totals
            .iter()
            .map(|(k, v)| StatLine {
                team: k.team,
                pid: k.pid,
                stat: k.stat.clone(),
                total: *v,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Compact view of a game for summary-only rendering and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub final_inning: u32,
    pub game_over: bool,
    pub line_score: LineScore,
    pub scoring_plays: Vec<StampedEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<StatLine>,
}

impl GameSummary {
    /// The winning team once the game is over; `None` while in progress or tied.
    pub fn winner(&self) -> Option<TeamNum> {
        if !self.game_over {
            return None;
        }
        self.line_score.leader()
    }

    /// Serializes the summary to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbp_events::{plate_appearance, solo_score, stat, ScoreType};

    fn scored(inning: u32, team: TeamNum, pid: PlayerId) -> StampedEvent {
        StampedEvent::new(inning, solo_score(team, pid, "Player", ScoreType::Hit))
    }

    #[test]
    fn test_line_score_from_scoring() {
        let records = vec![
            scored(1, TeamNum::Away, 21),
            scored(1, TeamNum::Away, 22),
            StampedEvent::new(2, plate_appearance(TeamNum::Home, 7)),
            scored(4, TeamNum::Home, 8),
        ];
        let line = LineScore::from_scoring(&records);

        assert_eq!(line.innings, 4);
        assert_eq!(
            line.teams[TeamNum::Away.index()].runs_by_inning,
            BTreeMap::from([(1, 2)])
        );
        assert_eq!(
            line.teams[TeamNum::Home.index()].runs_by_inning,
            BTreeMap::from([(4, 1)])
        );
        assert_eq!(line.total(TeamNum::Away), 2);
        assert_eq!(line.runs(TeamNum::Home, 4), 1);
        assert_eq!(line.runs(TeamNum::Home, 0), 0);
        assert_eq!(line.runs(TeamNum::Home, 12), 0);
        assert_eq!(line.leader(), Some(TeamNum::Away));
    }

    #[test]
    fn test_line_score_padding() {
        let line = LineScore::from_scoring(&[scored(2, TeamNum::Home, 1)]).padded_to(9);
        assert_eq!(line.innings, 9);
        assert_eq!(line.runs(TeamNum::Home, 2), 1);
        assert_eq!(line.runs(TeamNum::Away, 9), 0);
        assert!(line.teams[1].runs_by_inning.is_empty());

        // Padding never truncates.
        let line = line.padded_to(3);
        assert_eq!(line.innings, 9);
    }

    #[test]
    fn test_line_score_far_inning_stays_sparse() {
        let line = LineScore::from_scoring(&[
            scored(1, TeamNum::Away, 21),
            scored(u32::MAX, TeamNum::Home, 8),
        ])
        .padded_to(u32::MAX);

        assert_eq!(line.innings, u32::MAX);
        assert_eq!(line.teams[TeamNum::Home.index()].runs_by_inning.len(), 1);
        assert_eq!(line.teams[TeamNum::Away.index()].runs_by_inning.len(), 1);
        assert_eq!(line.runs(TeamNum::Home, u32::MAX), 1);
        assert_eq!(line.leader(), None);
    }

    #[test]
    fn test_line_score_json_roundtrip() {
        let line = LineScore::from_scoring(&[scored(3, TeamNum::Home, 8)]).padded_to(9);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["teams"][0]["runs_by_inning"], serde_json::json!({"3": 1}));

        let parsed: LineScore = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, line);
    }

    #[test]
    fn test_empty_line_score() {
        let line = LineScore::from_scoring(&Vec::<StampedEvent>::new());
        assert_eq!(line.innings, 0);
        assert_eq!(line.leader(), None);
    }

    #[test]
    fn test_stat_totals() {
        let records = vec![
            StampedEvent::new(1, stat(TeamNum::Home, Some(7), "pa", 1.0)),
            StampedEvent::new(1, stat(TeamNum::Home, Some(7), "pa", 1.0)),
            StampedEvent::new(2, stat(TeamNum::Home, Some(8), "pa", 1.0)),
            StampedEvent::new(2, stat(TeamNum::Home, None, "lob", 2.0)),
            StampedEvent::new(3, stat(TeamNum::Home, Some(7), "h", 1.0)),
            StampedEvent::new(3, stat(TeamNum::Home, Some(7), "h", -1.0)),
            StampedEvent::new(3, stat(TeamNum::Away, Some(21), "pa", 1.0)),
            scored(3, TeamNum::Away, 21),
        ];
        let totals = StatTotals::from_events(&records);

        assert_eq!(totals.get(TeamNum::Home, Some(7), "pa"), 2.0);
        assert_eq!(totals.get(TeamNum::Home, Some(7), "h"), 0.0);
        assert_eq!(totals.get(TeamNum::Home, None, "lob"), 2.0);
        assert_eq!(totals.get(TeamNum::Home, Some(99), "pa"), 0.0);
        assert_eq!(totals.team_total(TeamNum::Home, "pa"), 3.0);
        assert_eq!(totals.team_total(TeamNum::Away, "pa"), 1.0);
        assert_eq!(totals.players(TeamNum::Home), vec![7, 8]);
        assert_eq!(totals.len(), 5);
    }

    #[test]
    fn test_stat_lines_order() {
        let mut totals = StatTotals::new();
        totals.add(&StatChange::new(TeamNum::Away, Some(3), "h", 1.0));
        totals.add(&StatChange::new(TeamNum::Home, Some(5), "pa", 1.0));
        totals.add(&StatChange::new(TeamNum::Home, None, "lob", 1.0));

        let lines = totals.lines();
        assert_eq!(lines[0].team, TeamNum::Home);
        assert_eq!(lines[0].pid, None);
        assert_eq!(lines[1].pid, Some(5));
        assert_eq!(lines[2].team, TeamNum::Away);
    }

    #[test]
    fn test_winner_requires_game_over() {
        let mut summary = GameSummary {
            final_inning: 9,
            game_over: false,
            line_score: LineScore::from_scoring(&[scored(9, TeamNum::Home, 1)]),
            scoring_plays: Vec::new(),
            stats: Vec::new(),
        };
        assert_eq!(summary.winner(), None);

        summary.game_over = true;
        assert_eq!(summary.winner(), Some(TeamNum::Home));
    }

    #[test]
    fn test_summary_serialization() {
        let summary = GameSummary {
            final_inning: 1,
            game_over: true,
            line_score: LineScore::from_scoring(&[scored(1, TeamNum::Away, 21)]),
            scoring_plays: vec![scored(1, TeamNum::Away, 21)],
            stats: Vec::new(),
        };
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"final_inning\": 1"));
        assert!(!json.contains("\"stats\""));

        let parsed: GameSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
