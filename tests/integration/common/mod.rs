//! Shared fixtures for the integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use parlay_settle::bet::{GameStatus, Sport};
use parlay_settle::boxscore::{BoxScore, ScoringPlay};
use parlay_settle::cache::{Clock, EventCache, ManualClock};
use parlay_settle::reference::NameNormalizer;
use parlay_settle::resolver::GameResolver;
use parlay_settle::upstream::{FixtureSource, GameSummary, ScheduledEvent, TeamSide};
use std::sync::Arc;
use std::time::Duration;

pub const TTL: Duration = Duration::from_secs(300);

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
}

/// A clock at 17:00 UTC on the given November day
pub fn clock_on(d: u32) -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 11, d, 17, 0, 0).unwrap(),
    ))
}

/// Cowboys at Eagles, listed on the scoreboard for `date`
pub fn cowboys_at_eagles(id: &str, date: NaiveDate, status: GameStatus) -> ScheduledEvent {
    ScheduledEvent {
        id: id.to_string(),
        sport: Sport::Nfl,
        date,
        start_time: None,
        home: TeamSide::new("Philadelphia Eagles", "PHI", 0),
        away: TeamSide::new("Dallas Cowboys", "DAL", 0),
        status,
        period: 0,
        clock: String::new(),
    }
}

pub fn nfl_event(id: &str, date: NaiveDate, away: (&str, &str), home: (&str, &str)) -> ScheduledEvent {
    ScheduledEvent {
        id: id.to_string(),
        sport: Sport::Nfl,
        date,
        start_time: None,
        home: TeamSide::new(home.0, home.1, 0),
        away: TeamSide::new(away.0, away.1, 0),
        status: GameStatus::Scheduled,
        period: 0,
        clock: String::new(),
    }
}

/// Box score with Prescott passing and Pollard rushing, Pollard's
/// touchdown only recorded as a scoring play
pub fn cowboys_summary() -> GameSummary {
    let boxscore: BoxScore = serde_json::from_str(
        r#"[
            {
                "team": {"displayName": "Dallas Cowboys", "abbreviation": "DAL"},
                "statistics": [
                    {"name": "passing", "labels": ["C/ATT", "YDS", "AVG", "TD", "INT"],
                     "athletes": [{"athlete": {"displayName": "Dak Prescott"}, "stats": ["22/31", "210", "6.8", "2", "0"]}]},
                    {"name": "rushing", "labels": ["CAR", "YDS", "AVG", "TD", "LONG"],
                     "athletes": [{"athlete": {"displayName": "Tony Pollard"}, "stats": ["18", "77", "4.3", "0", "15"]}]},
                    {"name": "receiving", "labels": ["REC", "YDS", "AVG", "TD", "LONG"],
                     "athletes": [{"athlete": {"displayName": "CeeDee Lamb"}, "stats": ["8", "112", "14.0", "2", "41"]}]}
                ]
            }
        ]"#,
    )
    .unwrap();

    let scoring_plays: Vec<ScoringPlay> = serde_json::from_str(
        r#"[
            {"type": {"text": "Passing Touchdown"}, "text": "Dak Prescott pass to CeeDee Lamb for 12 yds",
             "team": {"displayName": "Dallas Cowboys"},
             "participants": [
                {"athlete": {"displayName": "CeeDee Lamb"}, "type": "scorer"},
                {"athlete": {"displayName": "Dak Prescott"}, "type": "passer"}
             ]},
            {"type": {"text": "Rushing Touchdown"}, "text": "Tony Pollard 3 Yd Run",
             "team": {"displayName": "Dallas Cowboys"},
             "participants": [{"athlete": {"displayName": "Tony Pollard"}, "type": "scorer"}]}
        ]"#,
    )
    .unwrap();

    GameSummary {
        boxscore,
        scoring_plays,
    }
}

pub fn resolver(source: Arc<FixtureSource>, clock: Arc<dyn Clock>) -> GameResolver {
    let cache = Arc::new(EventCache::new(TTL, clock));
    GameResolver::new(source, Arc::new(NameNormalizer::default()), cache)
}
