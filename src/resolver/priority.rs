//! How well a scheduled event fits a leg's teams

use crate::bet::Sport;
use crate::reference::{is_placeholder, NameNormalizer};
use crate::upstream::{ScheduledEvent, TeamSide};

/// Match strength, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchPriority {
    /// The player's own team plays in the event
    PlayerTeam,
    /// Both recorded teams play, in either orientation
    BothTeams,
    /// One recorded team plays; the schedule supplies the opponent
    OneTeam,
}

/// Teams a leg was recorded with
#[derive(Debug, Clone, Copy)]
pub struct Matchup<'a> {
    pub sport: Sport,
    pub away: &'a str,
    pub home: &'a str,
    pub player_team: Option<&'a str>,
}

impl<'a> Matchup<'a> {
    /// Player team, ignoring blanks and placeholders
    pub fn player_team(&self) -> Option<&'a str> {
        self.player_team.filter(|t| !is_placeholder(t))
    }

    /// Best priority any event could reach for this matchup
    pub fn best_possible(&self) -> MatchPriority {
        if self.player_team().is_some() {
            MatchPriority::PlayerTeam
        } else {
            MatchPriority::BothTeams
        }
    }

    /// Priority of `event` for this matchup, `None` when it does not fit
    pub fn priority(&self, event: &ScheduledEvent, normalizer: &NameNormalizer) -> Option<MatchPriority> {
        let plays_on = |raw: &str, side: &TeamSide| {
            side.names()
                .any(|name| normalizer.same_team(raw, name, self.sport))
        };
        let plays_in = |raw: &str| plays_on(raw, &event.home) || plays_on(raw, &event.away);

        if self.player_team().is_some_and(plays_in) {
            return Some(MatchPriority::PlayerTeam);
        }

        let straight = plays_on(self.away, &event.away) && plays_on(self.home, &event.home);
        let swapped = plays_on(self.away, &event.home) && plays_on(self.home, &event.away);
        if straight || swapped {
            return Some(MatchPriority::BothTeams);
        }

        if plays_in(self.away) || plays_in(self.home) {
            return Some(MatchPriority::OneTeam);
        }
        None
    }
}
