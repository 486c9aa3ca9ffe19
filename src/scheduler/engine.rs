//! Job bodies
//!
//! Each run loads a bounded batch of active bets, works on copies, and
//! commits one bet at a time. Every job pages through the active set with
//! its own cursor, so bets that stay open for a long time cannot hold the
//! batch and starve newer ones. Bets run concurrently up to the configured
//! limit; legs within a bet run in recorded order. A failed lookup leaves
//! the leg as it was and the next run retries it.

use super::{JobKind, JobReport};
use crate::bet::{Bet, BetCategory, GameStatus, Leg};
use crate::cache::{CacheKey, Clock};
use crate::config::SchedulerConfig;
use crate::reference::{is_placeholder, NameNormalizer};
use crate::resolver::GameResolver;
use crate::settlement::{apply_bet_status, is_archivable, refresh_leg, settle_leg};
use crate::store::{BetCursor, BetStore};
use crate::telemetry::{audit, increment, record_job_duration, set_gauge, CounterMetric, GaugeMetric};
use chrono::{DateTime, NaiveDate, Utc};
use futures_util::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Per-leg result inside one bet
#[derive(Debug, Clone, Copy, Default)]
struct LegResult {
    failed: bool,
}

/// Per-bet result inside one run
#[derive(Debug, Clone, Copy, Default)]
struct BetResult {
    updated: bool,
    failed: bool,
}

/// State shared by every bet in one run
#[derive(Default)]
struct RunContext {
    /// Games already refetched for finalization this run
    finalized: Mutex<HashSet<CacheKey>>,
}

/// Runs the settlement jobs against a store
pub struct SettlementEngine {
    store: Arc<dyn BetStore>,
    resolver: Arc<GameResolver>,
    normalizer: Arc<NameNormalizer>,
    clock: Arc<dyn Clock>,
    config: SchedulerConfig,
    /// Last bet each job processed; the next run starts after it
    cursors: Mutex<HashMap<JobKind, BetCursor>>,
}

impl SettlementEngine {
    pub fn new(
        store: Arc<dyn BetStore>,
        resolver: Arc<GameResolver>,
        normalizer: Arc<NameNormalizer>,
        clock: Arc<dyn Clock>,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            store,
            resolver,
            normalizer,
            clock,
            config,
            cursors: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn BetStore> {
        &self.store
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Run every job once, in pipeline order
    pub async fn run_once_all(&self) -> anyhow::Result<Vec<JobReport>> {
        let mut reports = Vec::with_capacity(JobKind::ALL.len());
        for job in JobKind::ALL {
            reports.push(self.run_job(job).await?);
        }
        Ok(reports)
    }

    /// Run one job over the current batch of active bets
    pub async fn run_job(&self, job: JobKind) -> anyhow::Result<JobReport> {
        let started = Instant::now();
        if job == JobKind::LiveRefresh {
            let purged = self.resolver.cache().purge_stale().await;
            if purged > 0 {
                debug!(purged, "Dropped stale cached games");
            }
        }

        let bets = self.next_batch(job).await?;
        let context = RunContext::default();

        let results: Vec<BetResult> = stream::iter(bets)
            .map(|bet| self.process_bet(job, bet, &context))
            .buffer_unordered(self.config.concurrency.max(1))
            .collect()
            .await;

        let mut report = JobReport::new(job);
        report.processed = results.len();
        report.updated = results.iter().filter(|r| r.updated).count();
        report.failed = results.iter().filter(|r| r.failed).count();
        report.elapsed = started.elapsed();

        let outcome = if report.is_clean() { "ok" } else { "partial" };
        increment(CounterMetric::JobRuns, &[("job", job.name()), ("outcome", outcome)]);
        record_job_duration(job.name(), report.elapsed);
        audit::job_finished(
            job.name(),
            report.processed,
            report.updated,
            report.failed,
            report.elapsed,
        );

        if job == JobKind::Archive {
            let remaining = self.store.active_bets(usize::MAX).await?.len();
            set_gauge(GaugeMetric::ActiveBets, remaining as f64);
        }

        Ok(report)
    }

    /// The batch after this job's cursor, wrapping to the oldest bet once
    /// the end of the active set is reached
    async fn next_batch(&self, job: JobKind) -> anyhow::Result<Vec<Bet>> {
        let limit = self.config.batch_size.max(1);
        let mut cursors = self.cursors.lock().await;
        let after = cursors.get(&job).copied();

        let mut bets = self.store.active_bets_after(after, limit).await?;
        if bets.is_empty() && after.is_some() {
            bets = self.store.active_bets_after(None, limit).await?;
        }

        match bets.last() {
            Some(last) if bets.len() == limit => {
                cursors.insert(job, BetCursor::of(last));
            }
            _ => {
                cursors.remove(&job);
            }
        }
        Ok(bets)
    }

    async fn process_bet(&self, job: JobKind, mut bet: Bet, context: &RunContext) -> BetResult {
        let original = bet.clone();
        let now = self.clock.now();
        let mut result = BetResult::default();

        for idx in 0..bet.legs.len() {
            let leg_result = self
                .process_leg(job, bet.id, &mut bet.legs[idx], now, context)
                .await;
            result.failed |= leg_result.failed;
        }

        if let Some((from, to)) = apply_bet_status(&mut bet) {
            audit::bet_status_changed(bet.id, from, to, job.name());
        }

        if job == JobKind::Archive {
            self.archive(&mut bet);
        }

        if bet == original {
            return result;
        }

        bet.updated_at = Some(now);
        match self.store.commit(&bet).await {
            Ok(_) => result.updated = true,
            Err(e) => {
                warn!(bet_id = %bet.id, job = job.name(), error = %e, "Commit failed, bet left unchanged");
                result.failed = true;
            }
        }
        result
    }

    async fn process_leg(
        &self,
        job: JobKind,
        bet_id: Uuid,
        leg: &mut Leg,
        now: DateTime<Utc>,
        context: &RunContext,
    ) -> LegResult {
        if leg.status.is_terminal() {
            return LegResult::default();
        }

        match job {
            JobKind::OrphanRepair => self.repair_links(leg, now).await,
            JobKind::NameStandardize => {
                self.standardize_names(leg);
                LegResult::default()
            }
            JobKind::LiveRefresh => self.refresh(bet_id, leg, false, context).await,
            JobKind::Finalize => self.refresh(bet_id, leg, true, context).await,
            JobKind::HitStatus => {
                if let Some(status) = settle_leg(leg) {
                    if let Some(achieved) = leg.achieved_value {
                        audit::leg_settled(bet_id, leg.id, status, achieved, leg.target);
                    }
                    let label = status.to_string();
                    increment(CounterMetric::LegsSettled, &[("status", label.as_str())]);
                }
                LegResult::default()
            }
            JobKind::Archive => LegResult::default(),
        }
    }

    /// Whether an unlinked leg was tried too recently to retry
    fn in_backoff(&self, leg: &Leg, now: DateTime<Utc>) -> bool {
        let retry = chrono::Duration::seconds(self.config.orphan_retry_secs as i64);
        leg.last_attempt_at.is_some_and(|last| now - last < retry)
    }

    async fn repair_links(&self, leg: &mut Leg, now: DateTime<Utc>) -> LegResult {
        if leg.category == BetCategory::PlayerProp && leg.player_team.is_none() {
            if let Some(name) = leg.player_name.as_deref() {
                if let Some(player) = self.normalizer.find_player(name, leg.sport) {
                    debug!(leg_id = %leg.id, player = %player.name, team = ?player.team, "Linked player");
                    leg.player_team = player.team.clone();
                }
            }
        }

        if leg.game_id.is_some() || leg.game_date > self.today() || self.in_backoff(leg, now) {
            return LegResult::default();
        }

        leg.last_attempt_at = Some(now);
        match self.resolver.resolve_leg(leg).await {
            Ok(Some(game)) => {
                leg.game_id = Some(game.id().to_string());
                if leg.game_status == GameStatus::Unknown {
                    leg.game_status = game.status();
                }
                leg.home_team = self.normalizer.normalize(&game.home().name, leg.sport);
                leg.away_team = self.normalizer.normalize(&game.away().name, leg.sport);
                info!(leg_id = %leg.id, game_id = %game.id(), "Linked leg to game");
                LegResult::default()
            }
            Ok(None) => {
                debug!(leg_id = %leg.id, sport = %leg.sport, date = %leg.game_date, "No game for leg yet");
                LegResult::default()
            }
            Err(e) => {
                warn!(leg_id = %leg.id, error = %e, "Game lookup failed");
                LegResult { failed: true }
            }
        }
    }

    fn standardize_names(&self, leg: &mut Leg) {
        let sport = leg.sport;
        let canonical = |raw: &str| -> Option<String> {
            if is_placeholder(raw) {
                return None;
            }
            self.normalizer
                .lookup(raw, sport)
                .map(|team| team.short.clone())
                .filter(|short| short != raw)
        };

        if let Some(name) = canonical(&leg.home_team) {
            leg.home_team = name;
        }
        if let Some(name) = canonical(&leg.away_team) {
            leg.away_team = name;
        }
        if let Some(name) = leg.player_team.as_deref().and_then(canonical) {
            leg.player_team = Some(name);
        }
        if let Some(name) = leg.bet_team.as_deref().and_then(canonical) {
            leg.bet_team = Some(name);
        }
        if let Some(raw) = leg.player_name.as_deref() {
            if let Some(player) = self.normalizer.find_player(raw, sport) {
                if player.name != raw {
                    leg.player_name = Some(player.name.clone());
                }
            }
        }
    }

    async fn refresh(
        &self,
        bet_id: Uuid,
        leg: &mut Leg,
        finalize: bool,
        context: &RunContext,
    ) -> LegResult {
        let today = self.today();
        // unlinked legs are left to orphan repair and its backoff
        if leg.game_id.is_none() || leg.game_date > today {
            return LegResult::default();
        }
        // finalize only looks at games already seen final; live refresh at the rest
        if finalize != leg.game_status.is_final() || (finalize && leg.value_final) {
            return LegResult::default();
        }

        if finalize {
            let key = self.resolver.cache_key(
                leg.sport,
                leg.game_date,
                &leg.away_team,
                &leg.home_team,
                leg.player_team.as_deref(),
            );
            if context.finalized.lock().await.insert(key) {
                self.resolver.invalidate_leg(leg).await;
            }
        }

        let game = match self.resolver.resolve_leg(leg).await {
            Ok(Some(game)) => game,
            Ok(None) => return LegResult::default(),
            Err(e) => {
                warn!(leg_id = %leg.id, error = %e, "Game lookup failed, leg unchanged");
                return LegResult { failed: true };
            }
        };

        match refresh_leg(leg, &game, today, finalize) {
            Ok(outcome) => {
                if let Some((from, to)) = outcome.value_change {
                    let source = if finalize { "finalize" } else { "live_refresh" };
                    audit::leg_value_changed(bet_id, leg.id, from, to, source);
                }
                if let Some(e) = outcome.rejected {
                    warn!(leg_id = %leg.id, error = %e, "Achieved value rejected, leg flagged for review");
                    increment(CounterMetric::ValidationRejections, &[("stat", leg.stat_type.as_str())]);
                }
                LegResult::default()
            }
            Err(e) => {
                warn!(leg_id = %leg.id, error = %e, "Game status update refused");
                LegResult::default()
            }
        }
    }

    fn archive(&self, bet: &mut Bet) {
        if is_archivable(bet) {
            bet.is_active = false;
            audit::bet_archived(bet.id, bet.status);
            let label = bet.status.to_string();
            increment(CounterMetric::BetsArchived, &[("status", label.as_str())]);
        }
    }
}

impl std::fmt::Debug for SettlementEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettlementEngine")
            .field("config", &self.config)
            .finish()
    }
}
