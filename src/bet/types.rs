//! Bet and leg types

use super::StatType;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Supported leagues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    Nfl,
    Nba,
    Mlb,
    Nhl,
}

impl Sport {
    pub const ALL: [Sport; 4] = [Sport::Nfl, Sport::Nba, Sport::Mlb, Sport::Nhl];

    /// Path segment of the sport on the scoreboard API
    pub fn api_path(&self) -> &'static str {
        match self {
            Sport::Nfl => "football/nfl",
            Sport::Nba => "basketball/nba",
            Sport::Mlb => "baseball/mlb",
            Sport::Nhl => "hockey/nhl",
        }
    }

    /// Periods (quarters, innings, periods) before overtime
    pub fn regulation_periods(&self) -> u32 {
        match self {
            Sport::Nfl | Sport::Nba => 4,
            Sport::Mlb => 9,
            Sport::Nhl => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Nfl => "NFL",
            Sport::Nba => "NBA",
            Sport::Mlb => "MLB",
            Sport::Nhl => "NHL",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NFL" => Ok(Sport::Nfl),
            "NBA" => Ok(Sport::Nba),
            "MLB" => Ok(Sport::Mlb),
            "NHL" => Ok(Sport::Nhl),
            other => Err(format!("unknown sport: {other}")),
        }
    }
}

/// Whether a leg is about one player or about a team/game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetCategory {
    PlayerProp,
    TeamProp,
}

/// Over/under direction of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDirection {
    Over,
    Under,
}

/// Settlement status of a single leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegStatus {
    #[default]
    Pending,
    Live,
    Won,
    Lost,
}

impl LegStatus {
    /// Won and lost are never overwritten
    pub fn is_terminal(&self) -> bool {
        matches!(self, LegStatus::Won | LegStatus::Lost)
    }
}

impl fmt::Display for LegStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LegStatus::Pending => "pending",
            LegStatus::Live => "live",
            LegStatus::Won => "won",
            LegStatus::Lost => "lost",
        };
        f.write_str(s)
    }
}

/// Derived status of a whole bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    #[default]
    Pending,
    Live,
    Won,
    Lost,
    Completed,
}

impl BetStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BetStatus::Won | BetStatus::Lost | BetStatus::Completed)
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BetStatus::Pending => "pending",
            BetStatus::Live => "live",
            BetStatus::Won => "won",
            BetStatus::Lost => "lost",
            BetStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Lifecycle of the game a leg belongs to, decoupled from the leg status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Unknown,
    Scheduled,
    InProgress,
    Halftime,
    EndPeriod,
    Final,
    Postponed,
    Canceled,
}

impl GameStatus {
    /// Map an upstream status name such as `STATUS_IN_PROGRESS`
    pub fn from_upstream(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "STATUS_SCHEDULED" | "STATUS_DELAYED" => GameStatus::Scheduled,
            "STATUS_IN_PROGRESS" | "STATUS_RAIN_DELAY" | "STATUS_OVERTIME" => {
                GameStatus::InProgress
            }
            "STATUS_HALFTIME" => GameStatus::Halftime,
            "STATUS_END_PERIOD" | "STATUS_END_OF_PERIOD" => GameStatus::EndPeriod,
            "STATUS_FINAL" | "STATUS_FINAL_OT" | "STATUS_FULL_TIME" => GameStatus::Final,
            "STATUS_POSTPONED" | "STATUS_SUSPENDED" => GameStatus::Postponed,
            "STATUS_CANCELED" | "STATUS_CANCELLED" => GameStatus::Canceled,
            _ => GameStatus::Unknown,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Final)
    }

    /// Game has started and is not over
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            GameStatus::InProgress | GameStatus::Halftime | GameStatus::EndPeriod
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Unknown => "unknown",
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Halftime => "halftime",
            GameStatus::EndPeriod => "end_period",
            GameStatus::Final => "final",
            GameStatus::Postponed => "postponed",
            GameStatus::Canceled => "canceled",
        };
        f.write_str(s)
    }
}

/// One proposition within a wager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub id: Uuid,
    pub sport: Sport,
    /// Nominal date the bet slip gives for the game
    pub game_date: NaiveDate,
    /// Raw or normalized, possibly a placeholder such as "TBD"
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub player_name: Option<String>,
    /// Team the player belongs to
    #[serde(default)]
    pub player_team: Option<String>,
    /// Side a team prop is on (moneyline, spread, team total)
    #[serde(default)]
    pub bet_team: Option<String>,
    pub category: BetCategory,
    pub stat_type: StatType,
    pub target: Decimal,
    #[serde(default)]
    pub line: Option<LineDirection>,

    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub game_status: GameStatus,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    /// `None` until a matching game exists
    #[serde(default)]
    pub achieved_value: Option<Decimal>,
    /// Team name for first/last-team-to-score props
    #[serde(default)]
    pub achieved_label: Option<String>,
    /// Achieved value was computed from a final box score
    #[serde(default)]
    pub value_final: bool,
    #[serde(default)]
    pub status: LegStatus,
    #[serde(default)]
    pub is_hit: Option<bool>,
    /// Why the leg cannot be settled automatically
    #[serde(default)]
    pub review_note: Option<String>,
    /// Last time resolution was tried for this leg
    #[serde(default)]
    pub last_attempt_at: Option<DateTime<Utc>>,
}

impl Leg {
    /// Create a pending leg. The category follows from the stat type.
    pub fn new(
        sport: Sport,
        game_date: NaiveDate,
        away_team: impl Into<String>,
        home_team: impl Into<String>,
        stat_type: StatType,
        target: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sport,
            game_date,
            home_team: home_team.into(),
            away_team: away_team.into(),
            player_name: None,
            player_team: None,
            bet_team: None,
            category: stat_type.category(),
            stat_type,
            target,
            line: None,
            game_id: None,
            game_status: GameStatus::Unknown,
            home_score: None,
            away_score: None,
            achieved_value: None,
            achieved_label: None,
            value_final: false,
            status: LegStatus::Pending,
            is_hit: None,
            review_note: None,
            last_attempt_at: None,
        }
    }

    pub fn with_player(mut self, name: impl Into<String>, team: Option<&str>) -> Self {
        self.player_name = Some(name.into());
        self.player_team = team.map(str::to_string);
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.bet_team = Some(team.into());
        self
    }

    pub fn with_line(mut self, line: LineDirection) -> Self {
        self.line = Some(line);
        self
    }

    /// Team used to pick a side for team props
    pub fn side_team(&self) -> Option<&str> {
        self.bet_team
            .as_deref()
            .or(self.player_team.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// Per-status leg counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegCounts {
    pub total: usize,
    pub won: usize,
    pub lost: usize,
    pub pending: usize,
    pub live: usize,
}

/// An ordered set of legs sharing one wager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub id: Uuid,
    pub legs: Vec<Leg>,
    pub wager: Decimal,
    /// American odds as written on the slip
    #[serde(default)]
    pub odds: Option<i32>,
    #[serde(default)]
    pub payout: Option<Decimal>,
    #[serde(default)]
    pub status: BetStatus,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Bet {
    pub fn new(legs: Vec<Leg>, wager: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            legs,
            wager,
            odds: None,
            payout: None,
            status: BetStatus::Pending,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn leg_counts(&self) -> LegCounts {
        let mut counts = LegCounts {
            total: self.legs.len(),
            ..Default::default()
        };
        for leg in &self.legs {
            match leg.status {
                LegStatus::Won => counts.won += 1,
                LegStatus::Lost => counts.lost += 1,
                LegStatus::Pending => counts.pending += 1,
                LegStatus::Live => counts.live += 1,
            }
        }
        counts
    }

    pub fn leg(&self, id: Uuid) -> Option<&Leg> {
        self.legs.iter().find(|l| l.id == id)
    }
}
