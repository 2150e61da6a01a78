//! Plain-text narration of a play-by-play log.
//!
//! Produces one line per narrative record. Stat records are silent. Player
//! names are learned from the records that carry them (scoring plays and
//! injuries) and can be seeded up front; unknown players are shown by id.

use pbp_events::{
    BasesTaken, Direction, Distance, EventKind, HitOutcome, HitResult, PlayerId, Runner,
    ScoreType, Speed, StampedEvent,
};
use std::collections::HashMap;

/// Turns stamped records into readable lines.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    names: HashMap<PlayerId, String>,
}

impl Narrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the narrator with known player names.
    pub fn with_names(names: impl IntoIterator<Item = (PlayerId, String)>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Narrates a whole log, one line per narrative record.
    ///
    /// Each line is prefixed with the inning it was stamped with.
    pub fn narrate<'a>(&mut self, records: impl IntoIterator<Item = &'a StampedEvent>) -> Vec<String> {
        records
            .into_iter()
            .filter_map(|record| {
                self.describe(record)
                    .map(|text| format!("[{:>2}] {}", record.inning, text))
            })
            .collect()
    }

    /// Describes a single record. Returns `None` for stat records.
    pub fn describe(&mut self, record: &StampedEvent) -> Option<String> {
        self.learn_names(&record.event);

        let text = match &record.event {
            EventKind::InningStart { number } => {
                format!("Start of the {} inning", ordinal(number.get()))
            }
            EventKind::ExtraInning => {
                format!("Extra innings: start of the {}", ordinal(record.inning))
            }
            EventKind::SideOver => "Side retired".to_string(),
            EventKind::InningOver => format!("End of the {}", ordinal(record.inning)),
            EventKind::GameOver => "Game over".to_string(),
            EventKind::Injury(injury) => format!("{} ({}) is injured", injury.name, injury.team),
            EventKind::PlateAppearance(pa) => format!("{} steps up to the plate", self.name(pa.pid)),
            EventKind::Pitch(pitch) => {
                format!("{} throws a {}", self.name(pitch.pid), pitch.pitch_type)
            }
            EventKind::Bunt(ball) => format!(
                "{} bunts it {}{}",
                self.name(ball.pid),
                speed_adverb(ball.speed),
                direction_phrase(ball.direction)
            ),
            EventKind::Ground(ball) => format!(
                "{} hits a {}ground ball {}",
                self.name(ball.pid),
                speed_adjective(ball.speed),
                direction_phrase(ball.direction)
            ),
            EventKind::Line(ball) => format!(
                "{} hits a {}line drive {}",
                self.name(ball.pid),
                speed_adjective(ball.speed),
                direction_phrase(ball.direction)
            ),
            EventKind::Fly(ball) => format!(
                "{} hits {} {}",
                self.name(ball.pid),
                fly_phrase(ball.distance),
                direction_phrase(ball.direction)
            ),
            EventKind::HitResult(hit) => self.hit_result(hit),
            EventKind::Walk(walk) => {
                self.with_runners(format!("{} walks", self.name(walk.pid)), &walk.runners)
            }
            EventKind::StealStart(steal) => format!(
                "{} breaks for {}",
                self.name(steal.pid),
                steal.from.next()
            ),
            EventKind::StealEnd(steal) => {
                let text = if steal.out {
                    format!("{} is caught stealing {}", self.name(steal.pid), steal.to)
                } else {
                    format!("{} steals {}", self.name(steal.pid), steal.to)
                };
                self.with_runners(text, &steal.runners)
            }
            EventKind::Balk(balk) => {
                self.with_runners(format!("Balk by {}", self.name(balk.pid)), &balk.runners)
            }
            EventKind::Score(play) => {
                let scorer = play.players.scorer();
                let mut text = format!(
                    "{} scores for the {} team ({})",
                    scorer.name,
                    play.team,
                    score_type_label(play.score_type)
                );
                let assists: Vec<&str> =
                    play.players.assists().iter().map(|p| p.name.as_str()).collect();
                if !assists.is_empty() {
                    text.push_str(&format!(", credit to {}", assists.join(" and ")));
                }
                text
            }
            EventKind::Stat(_) => return None,
        };
        Some(text)
    }

    fn hit_result(&self, hit: &HitResult) -> String {
        let batter = self.name(hit.pid);
        let mut text = match hit.result {
            HitOutcome::FlyOut => format!("{} flies out", batter),
            HitOutcome::ThrowOut => format!("{} is thrown out", batter),
            HitOutcome::FieldersChoice => format!("{} reaches on a fielder's choice", batter),
            HitOutcome::Hit => format!("{} {}", batter, hit_verb(hit.num_bases)),
            HitOutcome::Error => match hit.pid_error {
                Some(fielder) => format!("{} reaches on an error by {}", batter, self.name(fielder)),
                None => format!("{} reaches on an error", batter),
            },
        };
        if !hit.pos_defense.is_empty() {
            let chain: Vec<String> = hit.pos_defense.iter().map(|p| p.to_string()).collect();
            text.push_str(&format!(" ({})", chain.join("-")));
        }
        if hit.out_at_next_base {
            text.push_str(", thrown out trying for an extra base");
        }
        self.with_runners(text, &hit.runners)
    }

    fn with_runners(&self, mut text: String, runners: &[Runner]) -> String {
        for runner in runners {
            let name = self.name(runner.pid);
            let clause = if runner.out {
                format!("{} out at {}", name, runner.to)
            } else if runner.scored() {
                format!("{} scores", name)
            } else {
                format!("{} to {}", name, runner.to)
            };
            text.push_str("; ");
            text.push_str(&clause);
        }
        text
    }

    fn learn_names(&mut self, event: &EventKind) {
        match event {
            EventKind::Score(play) => {
                for player in play.players.players() {
                    self.names.insert(player.pid, player.name.clone());
                }
            }
            EventKind::Injury(injury) => {
                self.names.insert(injury.injured_pid, injury.name.clone());
            }
            _ => {}
        }
    }

    fn name(&self, pid: PlayerId) -> String {
        match self.names.get(&pid) {
            Some(name) => name.clone(),
            None => format!("#{}", pid),
        }
    }
}

/// Narrates a log without any known names.
pub fn narrate<'a>(records: impl IntoIterator<Item = &'a StampedEvent>) -> Vec<String> {
    Narrator::new().narrate(records)
}

/// "1st", "2nd", "11th", "23rd".
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn direction_phrase(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "to the left side",
        Direction::Right => "to the right side",
        Direction::Middle => "up the middle",
    }
}

fn speed_adverb(speed: Speed) -> &'static str {
    match speed {
        Speed::Soft => "softly ",
        Speed::Normal => "",
        Speed::Hard => "hard ",
    }
}

fn speed_adjective(speed: Speed) -> &'static str {
    match speed {
        Speed::Soft => "soft ",
        Speed::Normal => "",
        Speed::Hard => "hard ",
    }
}

fn fly_phrase(distance: Distance) -> &'static str {
    match distance {
        Distance::Infield => "a pop-up",
        Distance::Shallow => "a shallow fly ball",
        Distance::Normal => "a fly ball",
        Distance::Deep => "a deep fly ball",
    }
}

fn hit_verb(bases: BasesTaken) -> &'static str {
    match bases {
        BasesTaken::Single => "singles",
        BasesTaken::Double => "doubles",
        BasesTaken::Triple => "triples",
        BasesTaken::HomeRun => "homers",
    }
}

fn score_type_label(score_type: ScoreType) -> &'static str {
    match score_type {
        ScoreType::Hit => "hit",
        ScoreType::HomeRun => "home run",
        ScoreType::Walk => "walk",
        ScoreType::Steal => "steal",
        ScoreType::Balk => "balk",
        ScoreType::Error => "error",
        ScoreType::FieldersChoice => "fielder's choice",
        ScoreType::Sacrifice => "sacrifice",
    }
}
