//! Timer-driven job loops

use super::{JobKind, SettlementEngine};
use crate::config::JobIntervals;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Runs every job on its own interval until shut down
pub struct Scheduler {
    engine: Arc<SettlementEngine>,
    intervals: JobIntervals,
}

/// Handle to running job loops
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    tasks: Vec<(JobKind, JoinHandle<()>)>,
}

impl Scheduler {
    pub fn new(engine: Arc<SettlementEngine>, intervals: JobIntervals) -> Self {
        Self { engine, intervals }
    }

    /// Spawn one loop per job. Each loop runs its job immediately, then on
    /// every tick; runs of the same job never overlap.
    pub fn start(&self) -> SchedulerHandle {
        let (shutdown, rx) = watch::channel(false);

        let tasks = JobKind::ALL
            .into_iter()
            .map(|job| {
                let period = job.interval(&self.intervals);
                let engine = Arc::clone(&self.engine);
                let rx = rx.clone();
                let task = tokio::spawn(async move {
                    run_loop(engine, job, period, rx).await;
                });
                (job, task)
            })
            .collect();

        tracing::info!(jobs = JobKind::ALL.len(), "Scheduler started");
        SchedulerHandle { shutdown, tasks }
    }
}

impl SchedulerHandle {
    /// Stop every loop, letting in-flight runs finish their commits
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        for (job, task) in self.tasks {
            if let Err(e) = task.await {
                tracing::warn!(job = job.name(), error = %e, "Job loop ended abnormally");
            }
        }
        tracing::info!("Scheduler stopped");
    }
}

async fn run_loop(
    engine: Arc<SettlementEngine>,
    job: JobKind,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match engine.run_job(job).await {
                    Ok(report) => {
                        tracing::debug!(
                            job = job.name(),
                            processed = report.processed,
                            updated = report.updated,
                            failed = report.failed,
                            "Job run complete"
                        );
                    }
                    Err(e) => {
                        tracing::warn!(job = job.name(), error = %e, "Job run failed");
                    }
                }
            }

            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
}
