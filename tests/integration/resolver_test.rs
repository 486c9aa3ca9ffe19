//! Game resolution against a canned scoreboard

mod common;

use common::{clock_on, cowboys_at_eagles, cowboys_summary, day, nfl_event, resolver, TTL};
use parlay_settle::bet::{GameStatus, Sport};
use parlay_settle::cache::SystemClock;
use parlay_settle::upstream::FixtureSource;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_swapped_home_and_away_still_match() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));
    let resolver = resolver(source, Arc::new(SystemClock));

    let game = resolver
        .resolve(Sport::Nfl, day(9), "Eagles", "Cowboys", None)
        .await
        .unwrap()
        .expect("game");
    assert_eq!(game.id(), "401");
    assert_eq!(game.home().name, "Philadelphia Eagles");
}

#[tokio::test]
async fn test_placeholder_teams_resolve_through_player_team() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(nfl_event("other", day(9), ("New York Giants", "NYG"), ("Washington Commanders", "WSH")));
    source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));
    let resolver = resolver(source, Arc::new(SystemClock));

    let game = resolver
        .resolve(Sport::Nfl, day(9), "TBD", "TBD", Some("Dallas Cowboys"))
        .await
        .unwrap()
        .expect("game");
    assert_eq!(game.id(), "401");
}

#[tokio::test]
async fn test_game_listed_next_day_is_found() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(cowboys_at_eagles("401", day(10), GameStatus::Scheduled));
    let resolver = resolver(source.clone(), Arc::new(SystemClock));

    let game = resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap()
        .expect("game");
    assert_eq!(game.id(), "401");
    assert_eq!(source.scoreboard_calls(), 2);
}

#[tokio::test]
async fn test_no_match_is_none_and_not_cached() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(nfl_event("other", day(9), ("New York Giants", "NYG"), ("Washington Commanders", "WSH")));
    let resolver = resolver(source.clone(), Arc::new(SystemClock));

    let game = assert_ok!(resolver.resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None).await);
    assert!(game.is_none());
    assert!(resolver.cache().is_empty().await);

    // an empty result is retried on the next lookup
    resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap();
    assert_eq!(source.scoreboard_calls(), 6);
}

#[tokio::test]
async fn test_scheduled_game_skips_summary() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));
    let resolver = resolver(source.clone(), Arc::new(SystemClock));

    let game = resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap()
        .expect("game");
    assert!(game.boxscore.is_empty());
    assert_eq!(source.summary_calls(), 0);
}

#[tokio::test]
async fn test_warm_cache_returns_same_document() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(cowboys_at_eagles("401", day(9), GameStatus::InProgress));
    source.set_summary("401", cowboys_summary());
    let clock = clock_on(9);
    let resolver = resolver(source.clone(), clock.clone());

    let cold = resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap()
        .expect("game");
    assert_eq!(source.scoreboard_calls(), 1);
    assert_eq!(source.summary_calls(), 1);

    // same game spelled differently hits the same entry
    let warm = resolver
        .resolve(Sport::Nfl, day(9), "Dallas Cowboys", "PHI", None)
        .await
        .unwrap()
        .expect("game");
    assert_eq!(*cold, *warm);
    assert_eq!(source.scoreboard_calls(), 1);
    assert_eq!(source.summary_calls(), 1);

    clock.advance(chrono::Duration::seconds(TTL.as_secs() as i64 + 1));
    let refetched = resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap()
        .expect("game");
    assert_eq!(*refetched, *cold);
    assert_eq!(source.scoreboard_calls(), 2);
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(cowboys_at_eagles("401", day(9), GameStatus::InProgress));
    let resolver = resolver(source.clone(), clock_on(9));

    resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap();
    source.update_event("401", GameStatus::Final, 20, 24);

    let key = resolver.cache_key(Sport::Nfl, day(9), "Cowboys", "Eagles", None);
    assert!(resolver.cache().invalidate(&key).await);

    let game = resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap()
        .expect("game");
    assert_eq!(game.status(), GameStatus::Final);
    assert_eq!(game.away().score, 24);
}

#[tokio::test]
async fn test_upstream_down_is_an_error() {
    let source = Arc::new(FixtureSource::new());
    source.set_failing(true);
    let resolver = resolver(source.clone(), Arc::new(SystemClock));

    assert_err!(resolver.resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None).await);
    assert_eq!(source.scoreboard_calls(), 1);
    assert!(resolver.cache().is_empty().await);
}

#[tokio::test]
async fn test_failed_day_is_not_skipped_for_weaker_match() {
    let source = Arc::new(FixtureSource::new());
    source.add_event(cowboys_at_eagles("exact", day(9), GameStatus::Scheduled));
    source.add_event(nfl_event("weaker", day(10), ("Dallas Cowboys", "DAL"), ("New York Giants", "NYG")));
    source.set_date_failing(day(9), true);
    let resolver = resolver(source.clone(), Arc::new(SystemClock));

    assert_err!(resolver.resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None).await);
    assert!(resolver.cache().is_empty().await);

    // once the day is readable again the exact game wins
    source.set_date_failing(day(9), false);
    let game = assert_ok!(resolver.resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None).await);
    assert_eq!(game.expect("game").id(), "exact");
}
