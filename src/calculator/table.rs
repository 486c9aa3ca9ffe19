//! Where each canonical stat lives in a sport's box score

use crate::bet::{Sport, StatType};

/// Category blocks to search, in order, and the column label to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSource {
    pub categories: &'static [&'static str],
    pub label: &'static str,
}

const fn src(categories: &'static [&'static str], label: &'static str) -> StatSource {
    StatSource { categories, label }
}

const PASSING: &[&str] = &["passing"];
const RUSHING: &[&str] = &["rushing"];
const RECEIVING: &[&str] = &["receiving"];
const DEFENSIVE: &[&str] = &["defensive"];
const KICKING: &[&str] = &["kicking"];
// basketball box scores are a single unlabeled table
const UNLABELED: &[&str] = &[""];
const BATTING: &[&str] = &["batting"];
const PITCHING: &[&str] = &["pitching"];
const SKATERS: &[&str] = &["forwards", "defenses", "skaters"];
const GOALIES: &[&str] = &["goalies"];

/// Categories that can hold a non-passing touchdown
pub const TOUCHDOWN_SOURCES: &[StatSource] = &[
    src(RUSHING, "TD"),
    src(RECEIVING, "TD"),
    src(&["interceptions"], "TD"),
    src(&["kickReturns"], "TD"),
    src(&["puntReturns"], "TD"),
    src(&["fumbles"], "TD"),
];

/// Stats counted toward double- and triple-doubles
pub const DOUBLE_DIGIT_STATS: &[StatType] = &[
    StatType::Points,
    StatType::Rebounds,
    StatType::Assists,
    StatType::Steals,
    StatType::Blocks,
];

/// Box-score location of a stat read with a single extractor call.
/// `None` when the stat is composite or not tracked for the sport.
pub fn direct_source(sport: Sport, stat: StatType) -> Option<StatSource> {
    use StatType::*;

    let source = match (sport, stat) {
        (Sport::Nfl, PassingYards) => src(PASSING, "YDS"),
        (Sport::Nfl, PassingTouchdowns) => src(PASSING, "TD"),
        (Sport::Nfl, PassingCompletions) => src(PASSING, "C/ATT"),
        (Sport::Nfl, InterceptionsThrown) => src(PASSING, "INT"),
        (Sport::Nfl, LongestPassCompletion) => src(PASSING, "LONG"),
        (Sport::Nfl, RushingYards) => src(RUSHING, "YDS"),
        (Sport::Nfl, RushingAttempts) => src(RUSHING, "CAR"),
        (Sport::Nfl, RushingTouchdowns) => src(RUSHING, "TD"),
        (Sport::Nfl, LongestRush) => src(RUSHING, "LONG"),
        (Sport::Nfl, ReceivingYards) => src(RECEIVING, "YDS"),
        (Sport::Nfl, Receptions) => src(RECEIVING, "REC"),
        (Sport::Nfl, ReceivingTouchdowns) => src(RECEIVING, "TD"),
        (Sport::Nfl, LongestReception) => src(RECEIVING, "LONG"),
        (Sport::Nfl, Sacks) => src(DEFENSIVE, "SACKS"),
        (Sport::Nfl, TacklesAssists) => src(DEFENSIVE, "TOT"),
        (Sport::Nfl, FieldGoalsMade) => src(KICKING, "FG"),
        (Sport::Nfl, KickingPoints) => src(KICKING, "PTS"),

        (Sport::Nba, Points) => src(UNLABELED, "PTS"),
        (Sport::Nba, Rebounds) => src(UNLABELED, "REB"),
        (Sport::Nba, OffensiveRebounds) => src(UNLABELED, "OREB"),
        (Sport::Nba, DefensiveRebounds) => src(UNLABELED, "DREB"),
        (Sport::Nba, Assists) => src(UNLABELED, "AST"),
        (Sport::Nba, Steals) => src(UNLABELED, "STL"),
        (Sport::Nba, Blocks) => src(UNLABELED, "BLK"),
        (Sport::Nba, Turnovers) => src(UNLABELED, "TO"),
        (Sport::Nba, ThreePointers) => src(UNLABELED, "3PT"),
        (Sport::Nba, FieldGoalsMade) => src(UNLABELED, "FG"),
        (Sport::Nba, FreeThrowsMade) => src(UNLABELED, "FT"),
        (Sport::Nba, PlusMinus) => src(UNLABELED, "+/-"),

        (Sport::Mlb, Hits) => src(BATTING, "H"),
        (Sport::Mlb, Runs) => src(BATTING, "R"),
        (Sport::Mlb, RunsBattedIn) => src(BATTING, "RBI"),
        (Sport::Mlb, HomeRuns) => src(BATTING, "HR"),
        (Sport::Mlb, Walks) => src(BATTING, "BB"),
        (Sport::Mlb, StrikeoutsBatter) => src(BATTING, "K"),
        (Sport::Mlb, StrikeoutsPitcher) => src(PITCHING, "K"),
        (Sport::Mlb, HitsAllowed) => src(PITCHING, "H"),
        (Sport::Mlb, EarnedRuns) => src(PITCHING, "ER"),
        (Sport::Mlb, WalksAllowed) => src(PITCHING, "BB"),

        (Sport::Nhl, Goals) => src(SKATERS, "G"),
        (Sport::Nhl, Assists) => src(SKATERS, "A"),
        (Sport::Nhl, PlusMinus) => src(SKATERS, "+/-"),
        (Sport::Nhl, ShotsOnGoal) => src(SKATERS, "S"),
        (Sport::Nhl, Blocks) => src(SKATERS, "BS"),
        (Sport::Nhl, Hits) => src(SKATERS, "HT"),
        (Sport::Nhl, PenaltyMinutes) => src(SKATERS, "PIM"),
        (Sport::Nhl, Saves) => src(GOALIES, "SV"),

        _ => return None,
    };
    Some(source)
}

/// Stats that are the sum of other stats
pub fn composite_parts(sport: Sport, stat: StatType) -> Option<&'static [StatType]> {
    use StatType::*;

    let parts: &'static [StatType] = match (sport, stat) {
        (Sport::Nfl, RushingReceivingYards) => &[RushingYards, ReceivingYards],
        (Sport::Nfl, PassingRushingYards) => &[PassingYards, RushingYards],
        (Sport::Nba, PointsReboundsAssists) => &[Points, Rebounds, Assists],
        (Sport::Nba, PointsRebounds) => &[Points, Rebounds],
        (Sport::Nba, PointsAssists) => &[Points, Assists],
        (Sport::Nba, ReboundsAssists) => &[Rebounds, Assists],
        (Sport::Nba, StealsBlocks) => &[Steals, Blocks],
        (Sport::Mlb, HitsRunsRbis) => &[Hits, Runs, RunsBattedIn],
        (Sport::Nhl, PointsHockey) => &[Goals, Assists],
        _ => return None,
    };
    Some(parts)
}
