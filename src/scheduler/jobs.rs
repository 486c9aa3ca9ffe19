//! Job kinds and run reports

use crate::config::JobIntervals;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// The periodic jobs that drive legs and bets forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Link legs to games and players they are missing
    OrphanRepair,
    /// Rewrite stored team and player names to canonical form
    NameStandardize,
    /// Update scores and achieved values for games not yet final
    LiveRefresh,
    /// Recompute values once from the final box score
    Finalize,
    /// Decide won/lost for legs with a final value
    HitStatus,
    /// Take settled bets out of the polling set
    Archive,
}

impl JobKind {
    /// Every job, in the order a one-shot pass runs them
    pub const ALL: [JobKind; 6] = [
        JobKind::OrphanRepair,
        JobKind::NameStandardize,
        JobKind::LiveRefresh,
        JobKind::Finalize,
        JobKind::HitStatus,
        JobKind::Archive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JobKind::OrphanRepair => "orphan_repair",
            JobKind::NameStandardize => "name_standardize",
            JobKind::LiveRefresh => "live_refresh",
            JobKind::Finalize => "finalize",
            JobKind::HitStatus => "hit_status",
            JobKind::Archive => "archive",
        }
    }

    pub fn interval(&self, intervals: &JobIntervals) -> Duration {
        let secs = match self {
            JobKind::OrphanRepair => intervals.orphan_repair_secs,
            JobKind::NameStandardize => intervals.name_standardize_secs,
            JobKind::LiveRefresh => intervals.live_refresh_secs,
            JobKind::Finalize => intervals.finalize_secs,
            JobKind::HitStatus => intervals.hit_status_secs,
            JobKind::Archive => intervals.archive_secs,
        };
        Duration::from_secs(secs.max(1))
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one job run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobReport {
    pub job: JobKind,
    /// Bets looked at
    pub processed: usize,
    /// Bets committed with changes
    pub updated: usize,
    /// Bets with a failed lookup or commit, retried next run
    pub failed: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl JobReport {
    pub fn new(job: JobKind) -> Self {
        Self {
            job,
            processed: 0,
            updated: 0,
            failed: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<17} processed={:<4} updated={:<4} failed={:<4} {:>6}ms",
            self.job.name(),
            self.processed,
            self.updated,
            self.failed,
            self.elapsed.as_millis()
        )
    }
}
