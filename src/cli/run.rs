//! Run command implementation

use super::{build_engine, snapshot_path};
use crate::config::Config;
use crate::scheduler::Scheduler;
use crate::store::MemoryStore;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Bet snapshot (JSON) to load and keep up to date
    #[arg(short, long)]
    pub bets: Option<PathBuf>,

    /// Seconds between snapshot saves while running
    #[arg(long, default_value_t = 60)]
    pub save_every: u64,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let path = snapshot_path(self.bets.as_ref(), config)?;
        let store = Arc::new(MemoryStore::load_json(&path).await?);
        let engine = Arc::new(build_engine(config, store.clone())?);

        let handle = Scheduler::new(engine, config.scheduler.intervals.clone()).start();

        let mut save = tokio::time::interval(Duration::from_secs(self.save_every.max(1)));
        save.tick().await;
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = save.tick() => {
                    if let Err(e) = store.save_json(&path).await {
                        tracing::warn!(error = %e, "Snapshot save failed");
                    }
                }
                result = &mut ctrl_c => {
                    result?;
                    tracing::info!("Shutdown requested");
                    break;
                }
            }
        }

        handle.shutdown().await;
        store.save_json(&path).await?;
        Ok(())
    }
}
