//! CLI interface for parlay-settle
//!
//! Provides subcommands for:
//! - `run`: Drive settlement on timers until Ctrl-C
//! - `settle`: Run every job once and exit
//! - `resolve`: Look up one game
//! - `config`: Show the effective configuration

mod resolve;
mod run;
mod settle;

pub use resolve::ResolveArgs;
pub use run::RunArgs;
pub use settle::SettleArgs;

use crate::cache::{Clock, EventCache, SystemClock};
use crate::config::Config;
use crate::reference::{NameNormalizer, ReferenceDirectory};
use crate::resolver::GameResolver;
use crate::scheduler::SettlementEngine;
use crate::store::BetStore;
use crate::upstream::{EspnClient, EspnConfig};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "parlay-settle")]
#[command(about = "Settlement and live tracking for multi-leg sports wagers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the settlement jobs on their intervals until Ctrl-C
    Run(RunArgs),
    /// Run every job once in pipeline order
    Settle(SettleArgs),
    /// Resolve one game and print it
    Resolve(ResolveArgs),
    /// Show configuration
    Config,
}

fn load_normalizer(config: &Config) -> anyhow::Result<NameNormalizer> {
    let directory = match &config.reference.path {
        Some(path) => ReferenceDirectory::load(path)
            .with_context(|| format!("loading reference directory {}", path.display()))?,
        None => ReferenceDirectory::builtin(),
    };
    tracing::info!(
        teams = directory.team_count(),
        players = directory.player_count(),
        "Reference directory ready"
    );
    Ok(NameNormalizer::new(directory))
}

fn build_resolver(
    config: &Config,
    normalizer: Arc<NameNormalizer>,
    clock: Arc<dyn Clock>,
) -> GameResolver {
    let source = Arc::new(EspnClient::with_config(EspnConfig::from(&config.upstream)));
    let cache = Arc::new(EventCache::new(
        Duration::from_secs(config.cache.ttl_secs),
        clock,
    ));
    GameResolver::new(source, normalizer, cache)
        .with_window_days(u64::from(config.resolver.search_window_days))
}

fn build_engine(config: &Config, store: Arc<dyn BetStore>) -> anyhow::Result<SettlementEngine> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let normalizer = Arc::new(load_normalizer(config)?);
    let resolver = Arc::new(build_resolver(config, Arc::clone(&normalizer), Arc::clone(&clock)));
    Ok(SettlementEngine::new(
        store,
        resolver,
        normalizer,
        clock,
        config.scheduler.clone(),
    ))
}

/// Snapshot path from the command line, else from the config file
fn snapshot_path(arg: Option<&PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    arg.or(config.store.snapshot_path.as_ref())
        .cloned()
        .context("no bet snapshot given: pass --bets or set store.snapshot_path")
}
