//! Settle command implementation

use super::{build_engine, snapshot_path};
use crate::config::Config;
use crate::store::MemoryStore;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Bet snapshot (JSON) to settle in place
    #[arg(short, long)]
    pub bets: Option<PathBuf>,

    /// Print the job reports as JSON
    #[arg(long)]
    pub json: bool,
}

impl SettleArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let path = snapshot_path(self.bets.as_ref(), config)?;
        let store = Arc::new(MemoryStore::load_json(&path).await?);
        let engine = build_engine(config, store.clone())?;

        let reports = engine.run_once_all().await?;
        store.save_json(&path).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                println!("{report}");
            }
        }
        Ok(())
    }
}
