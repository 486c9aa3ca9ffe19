//! Team and game-level props

use super::Achieved;
use crate::bet::{Leg, StatType};
use crate::reference::is_placeholder;
use crate::reference::matching::{clean_name, contains_phrase};
use crate::upstream::{GameDocument, Side, TeamSide};
use rust_decimal::Decimal;

/// Whether `team` names this scoreboard side, by fuzzy containment in
/// either direction against any of its spellings
pub fn names_side(team: &str, side: &TeamSide) -> bool {
    let wanted = clean_name(team);
    if wanted.is_empty() || is_placeholder(team) {
        return false;
    }
    side.names().map(clean_name).any(|name| {
        name == wanted || contains_phrase(&name, &wanted) || contains_phrase(&wanted, &name)
    })
}

/// Side of the game `team` plays for, home checked first
pub fn team_side(team: &str, game: &GameDocument) -> Option<Side> {
    [Side::Home, Side::Away]
        .into_iter()
        .find(|side| names_side(team, game.side(*side)))
}

pub(super) fn evaluate(leg: &Leg, game: &GameDocument) -> Option<Achieved> {
    let side = || leg.side_team().and_then(|team| team_side(team, game));

    let achieved = match leg.stat_type {
        StatType::TotalPoints => Achieved::Value(Decimal::from(game.total_score())),
        StatType::TeamTotalPoints => Achieved::Value(Decimal::from(game.side(side()?).score)),
        StatType::Moneyline | StatType::Spread => {
            Achieved::Value(Decimal::from(game.differential(side()?)))
        }
        StatType::FirstTeamToScore => Achieved::Team(scoring_team(game.scoring_plays.first())?),
        StatType::LastTeamToScore => Achieved::Team(scoring_team(game.scoring_plays.last())?),
        StatType::WillBeOvertime => {
            let overtime = game.event.period > leg.sport.regulation_periods();
            Achieved::Value(if overtime { Decimal::ONE } else { Decimal::ZERO })
        }
        _ => return None,
    };
    Some(achieved)
}

fn scoring_team(play: Option<&crate::boxscore::ScoringPlay>) -> Option<String> {
    let team = &play?.team;
    [&team.display_name, &team.short_display_name, &team.abbreviation]
        .into_iter()
        .find(|n| !n.trim().is_empty())
        .cloned()
}
