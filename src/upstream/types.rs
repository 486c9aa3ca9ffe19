//! Game types produced by the upstream source

use crate::bet::{GameStatus, Sport};
use crate::boxscore::{BoxScore, ScoringPlay};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Home or away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// One team's line on the scoreboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSide {
    /// Full display name, e.g. "Dallas Cowboys"
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub score: u32,
}

impl TeamSide {
    pub fn new(name: &str, abbreviation: &str, score: u32) -> Self {
        Self {
            name: name.to_string(),
            short_name: name.rsplit(' ').next().unwrap_or(name).to_string(),
            abbreviation: abbreviation.to_string(),
            score,
        }
    }

    /// Every spelling the scoreboard gives for this team
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_str(),
            self.short_name.as_str(),
            self.abbreviation.as_str(),
        ]
        .into_iter()
        .filter(|n| !n.trim().is_empty())
    }
}

/// An event as listed on a date's scoreboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: String,
    pub sport: Sport,
    /// Scoreboard date the event was listed under
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    pub home: TeamSide,
    pub away: TeamSide,
    pub status: GameStatus,
    #[serde(default)]
    pub period: u32,
    #[serde(default)]
    pub clock: String,
}

impl ScheduledEvent {
    pub fn side(&self, side: Side) -> &TeamSide {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

/// Per-event detail from the summary endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(default)]
    pub boxscore: BoxScore,
    #[serde(default)]
    pub scoring_plays: Vec<ScoringPlay>,
}

/// A resolved game: scoreboard line plus box score and scoring plays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDocument {
    pub event: ScheduledEvent,
    #[serde(default)]
    pub boxscore: BoxScore,
    #[serde(default)]
    pub scoring_plays: Vec<ScoringPlay>,
}

impl GameDocument {
    pub fn new(event: ScheduledEvent, summary: GameSummary) -> Self {
        Self {
            event,
            boxscore: summary.boxscore,
            scoring_plays: summary.scoring_plays,
        }
    }

    /// A document with no box score yet, e.g. for a game not started
    pub fn without_summary(event: ScheduledEvent) -> Self {
        Self::new(event, GameSummary::default())
    }

    pub fn id(&self) -> &str {
        &self.event.id
    }

    pub fn status(&self) -> GameStatus {
        self.event.status
    }

    pub fn home(&self) -> &TeamSide {
        &self.event.home
    }

    pub fn away(&self) -> &TeamSide {
        &self.event.away
    }

    pub fn side(&self, side: Side) -> &TeamSide {
        self.event.side(side)
    }

    pub fn total_score(&self) -> u32 {
        self.event.home.score + self.event.away.score
    }

    /// Score of `side` minus the score of the other side
    pub fn differential(&self, side: Side) -> i64 {
        i64::from(self.side(side).score) - i64::from(self.side(side.opposite()).score)
    }

    /// Touchdown plays in game order
    pub fn touchdown_plays(&self) -> impl DoubleEndedIterator<Item = &ScoringPlay> {
        self.scoring_plays.iter().filter(|p| p.is_touchdown())
    }
}
