//! Job pipeline against a canned upstream and an in-memory store

mod common;

use common::{clock_on, cowboys_at_eagles, cowboys_summary, day, resolver};
use parlay_settle::bet::{Bet, BetStatus, GameStatus, Leg, LegStatus, LineDirection, Sport, StatType};
use parlay_settle::cache::ManualClock;
use parlay_settle::config::{JobIntervals, SchedulerConfig};
use parlay_settle::reference::NameNormalizer;
use parlay_settle::resolver::GameResolver;
use parlay_settle::scheduler::{JobKind, Scheduler, SettlementEngine};
use parlay_settle::store::{BetStore, MemoryStore};
use parlay_settle::upstream::FixtureSource;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_ok;

struct Harness {
    source: Arc<FixtureSource>,
    clock: Arc<ManualClock>,
    store: Arc<MemoryStore>,
    resolver: Arc<GameResolver>,
    engine: Arc<SettlementEngine>,
}

impl Harness {
    fn new(bets: Vec<Bet>) -> Self {
        Self::with_config(bets, SchedulerConfig::default())
    }

    fn with_config(bets: Vec<Bet>, config: SchedulerConfig) -> Self {
        let source = Arc::new(FixtureSource::new());
        let clock = clock_on(9);
        let store = Arc::new(MemoryStore::with_bets(bets));
        let resolver = Arc::new(resolver(source.clone(), clock.clone()));
        let engine = Arc::new(SettlementEngine::new(
            store.clone(),
            resolver.clone(),
            Arc::new(NameNormalizer::default()),
            clock.clone(),
            config,
        ));
        Self {
            source,
            clock,
            store,
            resolver,
            engine,
        }
    }

    /// Move past the cache TTL
    fn advance_minutes(&self, minutes: i64) {
        self.clock.advance(chrono::Duration::minutes(minutes));
    }

    async fn bet(&self, id: uuid::Uuid) -> Bet {
        self.store.get(id).await.unwrap().expect("bet")
    }
}

fn cowboys_parlay() -> Bet {
    Bet::new(
        vec![
            Leg::new(Sport::Nfl, day(9), "Cowboys", "Eagles", StatType::Spread, dec!(-3.5))
                .with_team("Cowboys"),
            Leg::new(Sport::Nfl, day(9), "Cowboys", "Eagles", StatType::PassingYards, dec!(180))
                .with_player("Dak Prescott", Some("Cowboys"))
                .with_line(LineDirection::Over),
        ],
        dec!(20),
    )
}

#[tokio::test]
async fn test_bet_follows_game_to_archive() {
    let bet = cowboys_parlay();
    let h = Harness::new(vec![bet.clone()]);
    h.source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));
    h.source.set_summary("401", cowboys_summary());

    // scheduled: legs get linked, nothing else moves
    let reports = assert_ok!(h.engine.run_once_all().await);
    assert_eq!(reports.len(), JobKind::ALL.len());
    assert!(reports.iter().all(|r| r.is_clean()));

    let stored = h.bet(bet.id).await;
    assert_eq!(stored.status, BetStatus::Pending);
    for leg in &stored.legs {
        assert_eq!(leg.game_id.as_deref(), Some("401"));
        assert_eq!(leg.game_status, GameStatus::Scheduled);
        assert_eq!(leg.status, LegStatus::Pending);
        assert!(leg.achieved_value.is_none());
    }
    assert_eq!(h.source.summary_calls(), 0);

    // in progress: live values
    h.source.update_event("401", GameStatus::InProgress, 7, 10);
    h.advance_minutes(6);
    let report = h.engine.run_job(JobKind::LiveRefresh).await.unwrap();
    assert_eq!(report.updated, 1);

    let stored = h.bet(bet.id).await;
    assert_eq!(stored.status, BetStatus::Live);
    assert_eq!(stored.legs[0].status, LegStatus::Live);
    assert_eq!(stored.legs[0].achieved_value, Some(dec!(3)));
    assert_eq!(stored.legs[1].achieved_value, Some(dec!(210)));
    assert!(!stored.legs[1].value_final);

    // final: settled and archived in one pass
    h.source.update_event("401", GameStatus::Final, 20, 24);
    h.advance_minutes(6);
    let calls_before = h.source.scoreboard_calls();
    h.engine.run_once_all().await.unwrap();
    // one live fetch plus one forced refetch for finalization, shared by both legs
    assert_eq!(h.source.scoreboard_calls() - calls_before, 2);

    let stored = h.bet(bet.id).await;
    assert_eq!(stored.status, BetStatus::Won);
    assert!(!stored.is_active);
    assert!(stored.updated_at.is_some());
    for leg in &stored.legs {
        assert_eq!(leg.status, LegStatus::Won);
        assert!(leg.value_final);
        assert_eq!(leg.is_hit, Some(true));
    }
    assert_eq!(stored.legs[0].achieved_value, Some(dec!(4)));
    assert!(h.store.active_bets(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_leaves_leg_unchanged() {
    let bet = cowboys_parlay();
    let h = Harness::new(vec![bet.clone()]);
    h.source.add_event(cowboys_at_eagles("401", day(9), GameStatus::InProgress));
    h.source.set_summary("401", cowboys_summary());

    h.engine.run_job(JobKind::OrphanRepair).await.unwrap();
    let linked = h.bet(bet.id).await;

    h.source.set_failing(true);
    h.advance_minutes(6);
    let report = h.engine.run_job(JobKind::LiveRefresh).await.unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(report.updated, 0);
    assert_eq!(h.bet(bet.id).await, linked);

    // recovers on the next run
    h.source.set_failing(false);
    let report = h.engine.run_job(JobKind::LiveRefresh).await.unwrap();
    assert!(report.is_clean());
    assert_eq!(h.bet(bet.id).await.legs[1].achieved_value, Some(dec!(210)));
}

#[tokio::test]
async fn test_failed_commit_is_retried() {
    let bet = cowboys_parlay();
    let h = Harness::new(vec![bet.clone()]);
    h.source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));

    h.store.set_fail_commits(true);
    let report = h.engine.run_job(JobKind::OrphanRepair).await.unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(h.bet(bet.id).await, bet);

    // the failed attempt was never stored, so there is no backoff to wait out
    h.store.set_fail_commits(false);
    let report = h.engine.run_job(JobKind::OrphanRepair).await.unwrap();
    assert_eq!(report.updated, 1);
    assert_eq!(h.bet(bet.id).await.legs[0].game_id.as_deref(), Some("401"));
}

#[tokio::test]
async fn test_orphan_retry_backoff() {
    let bet = cowboys_parlay();
    let h = Harness::new(vec![bet.clone()]);

    h.engine.run_job(JobKind::OrphanRepair).await.unwrap();
    let stored = h.bet(bet.id).await;
    assert!(stored.legs.iter().all(|l| l.game_id.is_none()));
    assert!(stored.legs.iter().all(|l| l.last_attempt_at.is_some()));
    let calls = h.source.scoreboard_calls();
    assert!(calls > 0);

    // too soon to retry
    h.advance_minutes(5);
    h.engine.run_job(JobKind::OrphanRepair).await.unwrap();
    assert_eq!(h.source.scoreboard_calls(), calls);

    // the game shows up and the backoff has passed
    h.source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));
    h.advance_minutes(11);
    h.engine.run_job(JobKind::OrphanRepair).await.unwrap();
    assert!(h.bet(bet.id).await.legs.iter().all(|l| l.game_id.as_deref() == Some("401")));
}

#[tokio::test]
async fn test_future_legs_are_not_looked_up() {
    let leg = Leg::new(Sport::Nfl, day(16), "Cowboys", "Eagles", StatType::Moneyline, dec!(0))
        .with_team("Cowboys");
    let bet = Bet::new(vec![leg], dec!(5));
    let h = Harness::new(vec![bet.clone()]);

    let reports = h.engine.run_once_all().await.unwrap();
    assert!(reports.iter().all(|r| r.updated == 0));
    assert_eq!(h.source.scoreboard_calls(), 0);
    assert_eq!(h.bet(bet.id).await, bet);
}

#[tokio::test]
async fn test_names_standardized() {
    let leg = Leg::new(Sport::Nfl, day(9), "dallas cowboys", "PHI", StatType::Moneyline, dec!(0))
        .with_team("DAL");
    let bet = Bet::new(vec![leg], dec!(5));
    let h = Harness::new(vec![bet.clone()]);

    let report = h.engine.run_job(JobKind::NameStandardize).await.unwrap();
    assert_eq!(report.updated, 1);

    let stored = h.bet(bet.id).await;
    assert_eq!(stored.legs[0].away_team, "Cowboys");
    assert_eq!(stored.legs[0].home_team, "Eagles");
    assert_eq!(stored.legs[0].bet_team.as_deref(), Some("Cowboys"));

    // already canonical: nothing to commit
    let report = h.engine.run_job(JobKind::NameStandardize).await.unwrap();
    assert_eq!(report.updated, 0);
}

#[tokio::test]
async fn test_scheduler_runs_jobs_until_shutdown() {
    let bet = cowboys_parlay();
    let h = Harness::new(vec![bet.clone()]);
    h.source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));

    let intervals = JobIntervals {
        live_refresh_secs: 1,
        finalize_secs: 1,
        hit_status_secs: 1,
        archive_secs: 1,
        orphan_repair_secs: 1,
        name_standardize_secs: 1,
    };
    let handle = Scheduler::new(h.engine.clone(), intervals).start();

    let mut linked = false;
    for _ in 0..50 {
        if h.bet(bet.id).await.legs.iter().all(|l| l.game_id.is_some()) {
            linked = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    handle.shutdown().await;
    assert!(linked);
}

#[tokio::test]
async fn test_unresolvable_bet_does_not_starve_newer_bets() {
    let mut stuck = Bet::new(
        vec![Leg::new(Sport::Nfl, day(9), "Jets", "Bills", StatType::Moneyline, dec!(0)).with_team("Jets")],
        dec!(5),
    );
    let fresh = cowboys_parlay();
    stuck.created_at = fresh.created_at - chrono::Duration::hours(1);

    let config = SchedulerConfig {
        batch_size: 1,
        ..Default::default()
    };
    let h = Harness::with_config(vec![stuck.clone(), fresh.clone()], config);
    let mut game = cowboys_at_eagles("401", day(9), GameStatus::Final);
    game.home.score = 20;
    game.away.score = 24;
    h.source.add_event(game);
    h.source.set_summary("401", cowboys_summary());

    for _ in 0..4 {
        let reports = h.engine.run_once_all().await.unwrap();
        assert!(reports.iter().all(|r| r.processed <= 1));
        h.advance_minutes(60);
    }

    let settled = h.bet(fresh.id).await;
    assert_eq!(settled.status, BetStatus::Won);
    assert!(!settled.is_active);

    // the stuck bet keeps getting its turn
    let stuck = h.bet(stuck.id).await;
    assert!(stuck.is_active);
    assert!(stuck.legs[0].last_attempt_at.is_some());
    assert_eq!(h.store.active_bets(10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_live_refresh_purges_stale_games() {
    let h = Harness::new(vec![]);
    h.source.add_event(cowboys_at_eagles("401", day(9), GameStatus::Scheduled));
    h.resolver
        .resolve(Sport::Nfl, day(9), "Cowboys", "Eagles", None)
        .await
        .unwrap();
    assert_eq!(h.resolver.cache().len().await, 1);

    // still fresh: kept
    h.engine.run_job(JobKind::LiveRefresh).await.unwrap();
    assert_eq!(h.resolver.cache().len().await, 1);

    h.advance_minutes(6);
    h.engine.run_job(JobKind::LiveRefresh).await.unwrap();
    assert_eq!(h.resolver.cache().len().await, 0);
}
