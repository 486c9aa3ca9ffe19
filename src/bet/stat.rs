//! Canonical stat types
//!
//! Bet slips spell the same statistic many ways ("rec yds", "Receiving Yards",
//! "alt_receiving_yards"). Legs carry one closed [`StatType`]; [`StatType::parse`]
//! resolves the aliases once when a leg is ingested.

use super::{BetCategory, Sport};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! stat_types {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Canonical statistic a leg is settled on
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum StatType {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl StatType {
            pub const ALL: &'static [StatType] = &[$(StatType::$variant),+];

            /// Canonical snake_case name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(StatType::$variant => $name,)+
                }
            }
        }
    };
}

stat_types! {
    // Football
    PassingYards => "passing_yards",
    PassingTouchdowns => "passing_touchdowns",
    PassingCompletions => "passing_completions",
    InterceptionsThrown => "interceptions_thrown",
    LongestPassCompletion => "longest_pass_completion",
    RushingYards => "rushing_yards",
    RushingAttempts => "rushing_attempts",
    RushingTouchdowns => "rushing_touchdowns",
    LongestRush => "longest_rush",
    ReceivingYards => "receiving_yards",
    Receptions => "receptions",
    ReceivingTouchdowns => "receiving_touchdowns",
    LongestReception => "longest_reception",
    Sacks => "sacks",
    TacklesAssists => "tackles_assists",
    FieldGoalsMade => "field_goals_made",
    KickingPoints => "kicking_points",
    RushingReceivingYards => "rushing_receiving_yards",
    PassingRushingYards => "passing_rushing_yards",
    AnytimeTouchdown => "anytime_touchdown",
    TwoPlusTouchdowns => "player_to_score_2_touchdowns",
    ThreePlusTouchdowns => "player_to_score_3_touchdowns",
    FirstTouchdownScorer => "first_touchdown_scorer",
    LastTouchdownScorer => "last_touchdown_scorer",
    // Basketball
    Points => "points",
    Rebounds => "rebounds",
    OffensiveRebounds => "offensive_rebounds",
    DefensiveRebounds => "defensive_rebounds",
    Assists => "assists",
    Steals => "steals",
    Blocks => "blocks",
    Turnovers => "turnovers",
    ThreePointers => "three_pointers",
    FreeThrowsMade => "free_throws_made",
    PlusMinus => "plus_minus",
    PointsReboundsAssists => "points_rebounds_assists",
    PointsRebounds => "points_rebounds",
    PointsAssists => "points_assists",
    ReboundsAssists => "rebounds_assists",
    StealsBlocks => "steals_blocks",
    DoubleDouble => "double_double",
    TripleDouble => "triple_double",
    // Baseball
    Hits => "hits",
    Runs => "runs",
    RunsBattedIn => "runs_batted_in",
    HomeRuns => "home_runs",
    Walks => "walks",
    StrikeoutsBatter => "strikeouts_batter",
    StrikeoutsPitcher => "strikeouts_pitcher",
    HitsAllowed => "hits_allowed",
    EarnedRuns => "earned_runs",
    WalksAllowed => "walks_allowed",
    HitsRunsRbis => "hits_runs_rbis",
    // Hockey
    Goals => "goals",
    PointsHockey => "points_hockey",
    ShotsOnGoal => "shots_on_goal",
    Saves => "saves",
    PenaltyMinutes => "penalty_minutes",
    // Team and game props
    Moneyline => "moneyline",
    Spread => "spread",
    TotalPoints => "total_points",
    TeamTotalPoints => "team_total_points",
    FirstTeamToScore => "first_team_to_score",
    LastTeamToScore => "last_team_to_score",
    WillBeOvertime => "will_be_overtime",
}

impl StatType {
    pub fn category(&self) -> BetCategory {
        if self.is_team_prop() {
            BetCategory::TeamProp
        } else {
            BetCategory::PlayerProp
        }
    }

    pub fn is_team_prop(&self) -> bool {
        matches!(
            self,
            StatType::Moneyline
                | StatType::Spread
                | StatType::TotalPoints
                | StatType::TeamTotalPoints
                | StatType::FirstTeamToScore
                | StatType::LastTeamToScore
                | StatType::WillBeOvertime
        )
    }

    /// Touchdown props counted from return and ball-carrier scores
    pub fn is_touchdown_count(&self) -> bool {
        matches!(
            self,
            StatType::AnytimeTouchdown | StatType::TwoPlusTouchdowns | StatType::ThreePlusTouchdowns
        )
    }

    /// Resolve a free-form stat name for a sport.
    ///
    /// Case, underscores and hyphens are ignored. Returns `None` for names
    /// that have no canonical form in that sport.
    pub fn parse(raw: &str, sport: Sport) -> Option<StatType> {
        let key = alias_key(raw);
        if key.is_empty() {
            return None;
        }

        sport_aliases(sport)
            .iter()
            .chain(TEAM_ALIASES)
            .find(|(stat, aliases)| {
                alias_key(stat.as_str()) == key || aliases.iter().any(|a| *a == key)
            })
            .map(|(stat, _)| *stat)
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn alias_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

type AliasTable = &'static [(StatType, &'static [&'static str])];

fn sport_aliases(sport: Sport) -> AliasTable {
    match sport {
        Sport::Nfl => NFL_ALIASES,
        Sport::Nba => NBA_ALIASES,
        Sport::Mlb => MLB_ALIASES,
        Sport::Nhl => NHL_ALIASES,
    }
}

// Aliases are stored already lowercased with single spaces.
const NFL_ALIASES: AliasTable = &[
    (StatType::PassingYards, &["pass yards", "passing yds", "pass yds", "alt passing yards", "alt passing yds", "passing yards alt", "alt pass yds"]),
    (StatType::PassingTouchdowns, &["pass touchdowns", "passing td", "pass td", "passing tds"]),
    (StatType::InterceptionsThrown, &["interceptions", "int thrown", "ints"]),
    (StatType::PassingCompletions, &["completions", "pass completions"]),
    (StatType::LongestPassCompletion, &["longest completion", "longest pass"]),
    (StatType::RushingYards, &["rush yards", "rushing yds", "rush yds", "alt rushing yards", "alt rushing yds", "rushing yards alt", "alt rush yds"]),
    (StatType::RushingTouchdowns, &["rush touchdowns", "rushing td", "rush td"]),
    (StatType::RushingAttempts, &["rush attempts", "rushing att", "rush att", "carries"]),
    (StatType::LongestRush, &["longest rushing attempt", "longest run"]),
    (StatType::ReceivingYards, &["rec yards", "receiving yds", "rec yds", "alt receiving yards", "alt receiving yds", "alt rec yds"]),
    (StatType::ReceivingTouchdowns, &["rec touchdowns", "receiving td", "rec td"]),
    (StatType::Receptions, &["reception", "rec", "catches", "receptions alt", "alt receptions"]),
    (StatType::LongestReception, &["longest rec"]),
    (StatType::Sacks, &["sack", "sks", "quarterback sacks"]),
    (StatType::TacklesAssists, &["tackles", "tackle", "total tackles", "tackles and assists"]),
    (StatType::FieldGoalsMade, &["fg made", "field goals", "fgm"]),
    (StatType::KickingPoints, &["points", "kicker points"]),
    (StatType::RushingReceivingYards, &["rush receiving yards", "rush rec yards", "alt rushing receiving yards", "rushing + receiving yards"]),
    (StatType::PassingRushingYards, &["pass rushing yards", "passing + rushing yards"]),
    (StatType::AnytimeTouchdown, &["anytime td", "anytime td scorer", "any time touchdown scorer", "touchdown scorer", "td scorer", "any td", "anytime touchdown scorer"]),
    (StatType::TwoPlusTouchdowns, &["2+ touchdowns", "2+ tds", "two touchdowns", "to score 2+ touchdowns"]),
    (StatType::ThreePlusTouchdowns, &["3+ touchdowns", "3+ tds", "three touchdowns", "to score 3+ touchdowns"]),
    (StatType::FirstTouchdownScorer, &["first td scorer", "first td", "1st td scorer"]),
    (StatType::LastTouchdownScorer, &["last td scorer", "last td"]),
];

const NBA_ALIASES: AliasTable = &[
    (StatType::Points, &["point", "pts", "scoring", "player points"]),
    (StatType::ThreePointers, &["three pointers made", "3 pointers", "threes", "3pm", "3pt", "made threes"]),
    (StatType::FieldGoalsMade, &["fgm", "field goals"]),
    (StatType::FreeThrowsMade, &["ftm", "free throws"]),
    (StatType::Rebounds, &["rebound", "reb", "total rebounds", "trb"]),
    (StatType::OffensiveRebounds, &["off reb", "orb", "oreb"]),
    (StatType::DefensiveRebounds, &["def reb", "drb", "dreb"]),
    (StatType::Assists, &["assist", "ast", "total assists"]),
    (StatType::Turnovers, &["turnover", "to", "total turnovers"]),
    (StatType::Steals, &["steal", "stl", "total steals"]),
    (StatType::Blocks, &["block", "blk", "total blocks"]),
    (StatType::PlusMinus, &["+/", "plus minus"]),
    (StatType::PointsReboundsAssists, &["pra", "pts+reb+ast", "points + rebounds + assists"]),
    (StatType::PointsRebounds, &["pts+reb", "pr", "points + rebounds"]),
    (StatType::PointsAssists, &["pts ast", "pts+ast", "pa", "points + assists"]),
    (StatType::ReboundsAssists, &["reb ast", "reb+ast", "ra", "rebounds + assists"]),
    (StatType::StealsBlocks, &["stl+blk", "steals + blocks", "stocks"]),
    (StatType::DoubleDouble, &["double double", "dd"]),
    (StatType::TripleDouble, &["triple double", "td"]),
];

const MLB_ALIASES: AliasTable = &[
    (StatType::HomeRuns, &["home run", "hrs", "hr", "homers"]),
    (StatType::Hits, &["hit", "h", "total hits"]),
    (StatType::RunsBattedIn, &["runs batted in", "rbi", "rbis"]),
    (StatType::Runs, &["run", "r", "runs scored"]),
    (StatType::StrikeoutsBatter, &["batter strikeouts", "k", "strikeout", "strikeouts"]),
    (StatType::Walks, &["walk", "bb", "base on balls"]),
    (StatType::StrikeoutsPitcher, &["pitcher strikeouts", "pitching strikeouts", "ks"]),
    (StatType::EarnedRuns, &["er", "runs allowed", "earned runs allowed"]),
    (StatType::HitsAllowed, &["hits allowed"]),
    (StatType::WalksAllowed, &["walks allowed"]),
    (StatType::HitsRunsRbis, &["h+r+rbi", "hits + runs + rbis", "hrr"]),
];

const NHL_ALIASES: AliasTable = &[
    (StatType::Goals, &["goal", "g"]),
    (StatType::Assists, &["assist", "ast", "a", "total assists"]),
    (StatType::PointsHockey, &["points", "pts", "total points", "goals assists", "player points"]),
    (StatType::ShotsOnGoal, &["shots on goal", "sog", "shots", "shot"]),
    (StatType::Saves, &["save", "sv", "goalie saves"]),
    (StatType::PlusMinus, &["+/", "plus minus"]),
    (StatType::PenaltyMinutes, &["pim", "minutes"]),
    (StatType::Blocks, &["block", "blk", "shot blocks", "blocked shots"]),
    (StatType::Hits, &["hit", "hc"]),
];

// Shared by every sport, checked after the sport's own table.
const TEAM_ALIASES: AliasTable = &[
    (StatType::Moneyline, &["money line", "ml", "win", "to win"]),
    (StatType::Spread, &["point spread", "spread total", "run line", "rl", "puck line", "pl", "handicap"]),
    (StatType::TotalPoints, &["over under", "o/u", "total", "game total", "total runs", "total goals", "total points"]),
    (StatType::TeamTotalPoints, &["team total", "team points", "team score", "team total runs", "team total goals"]),
    (StatType::FirstTeamToScore, &["first to score", "team to score first"]),
    (StatType::LastTeamToScore, &["last to score", "team to score last"]),
    (StatType::WillBeOvertime, &["overtime", "will there be overtime", "extra innings"]),
];
