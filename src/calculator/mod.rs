//! Bet-Value Calculator
//!
//! Computes the value a leg's target is compared against from a resolved
//! game. Dispatch is a closed match over [`StatType`]: direct box-score
//! reads, sums of direct reads, touchdown counting with a scoring-play
//! fallback, and score arithmetic for team props. Missing box scores and
//! scoring plays are treated as empty.

mod table;
mod team;
mod touchdowns;

pub use table::{composite_parts, direct_source, StatSource};
pub use team::{names_side, team_side};

use crate::bet::{Leg, Sport, StatType};
use crate::boxscore::extract_stat;
use crate::upstream::{GameDocument, TeamSide};
use rust_decimal::Decimal;
use std::fmt;

/// Result of a calculation: a number, or a team name for
/// first/last-team-to-score props
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Achieved {
    Value(Decimal),
    Team(String),
}

impl Achieved {
    /// Numeric value compared against the leg's target.
    ///
    /// A team answer counts 1 when it is the leg's team and 0 otherwise;
    /// `None` when the leg names no team to compare with.
    pub fn leg_value(&self, leg: &Leg) -> Option<Decimal> {
        match self {
            Achieved::Value(v) => Some(*v),
            Achieved::Team(name) => {
                let wanted = leg.side_team()?;
                let side = TeamSide::new(name, "", 0);
                Some(if names_side(wanted, &side) {
                    Decimal::ONE
                } else {
                    Decimal::ZERO
                })
            }
        }
    }

    /// Team answer, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            Achieved::Value(_) => None,
            Achieved::Team(name) => Some(name),
        }
    }
}

impl fmt::Display for Achieved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Achieved::Value(v) => write!(f, "{v}"),
            Achieved::Team(name) => f.write_str(name),
        }
    }
}

/// Compute the leg's value, or `None` when it cannot be computed from this
/// game: no player on a player prop, a team prop whose team is on neither
/// side, or a stat not tracked for the sport.
pub fn evaluate(leg: &Leg, game: &GameDocument) -> Option<Achieved> {
    if leg.stat_type.is_team_prop() {
        return team::evaluate(leg, game);
    }

    let player = leg
        .player_name
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())?;

    player_stat(leg.sport, leg.stat_type, player, game).map(Achieved::Value)
}

/// [`evaluate`] with 0 standing in for "cannot compute"
pub fn calculate(leg: &Leg, game: &GameDocument) -> Achieved {
    evaluate(leg, game).unwrap_or(Achieved::Value(Decimal::ZERO))
}

fn player_stat(sport: Sport, stat: StatType, player: &str, game: &GameDocument) -> Option<Decimal> {
    match stat {
        StatType::AnytimeTouchdown | StatType::TwoPlusTouchdowns | StatType::ThreePlusTouchdowns
            if sport == Sport::Nfl =>
        {
            Some(touchdowns::touchdown_count(player, game))
        }
        StatType::FirstTouchdownScorer if sport == Sport::Nfl => {
            Some(touchdowns::first_touchdown_scorer(player, game))
        }
        StatType::LastTouchdownScorer if sport == Sport::Nfl => {
            Some(touchdowns::last_touchdown_scorer(player, game))
        }
        StatType::DoubleDouble if sport == Sport::Nba => double_digits(player, game, 2),
        StatType::TripleDouble if sport == Sport::Nba => double_digits(player, game, 3),
        _ => match composite_parts(sport, stat) {
            Some(parts) => parts
                .iter()
                .map(|part| direct_stat(sport, *part, player, game))
                .sum(),
            None => direct_stat(sport, stat, player, game),
        },
    }
}

/// One extractor read, trying each candidate category until one is nonzero
fn direct_stat(sport: Sport, stat: StatType, player: &str, game: &GameDocument) -> Option<Decimal> {
    let source = direct_source(sport, stat)?;
    let value = source
        .categories
        .iter()
        .map(|category| extract_stat(player, category, source.label, &game.boxscore))
        .find(|v| !v.is_zero())
        .unwrap_or(Decimal::ZERO);
    Some(value)
}

/// 1 when at least `needed` of the counting stats reach ten
fn double_digits(player: &str, game: &GameDocument, needed: usize) -> Option<Decimal> {
    let ten = Decimal::TEN;
    let mut reached = 0;
    for stat in table::DOUBLE_DIGIT_STATS {
        if direct_stat(Sport::Nba, *stat, player, game)? >= ten {
            reached += 1;
        }
    }
    Some(if reached >= needed {
        Decimal::ONE
    } else {
        Decimal::ZERO
    })
}
