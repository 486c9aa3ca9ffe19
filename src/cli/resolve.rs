//! Resolve command implementation

use super::{build_resolver, load_normalizer};
use crate::bet::Sport;
use crate::cache::SystemClock;
use crate::config::Config;
use chrono::NaiveDate;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// League: nfl, nba, mlb or nhl
    #[arg(long)]
    pub sport: Sport,

    /// Nominal game date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    #[arg(long, default_value = "TBD")]
    pub away: String,

    #[arg(long, default_value = "TBD")]
    pub home: String,

    /// Team of the player the leg is about
    #[arg(long)]
    pub player_team: Option<String>,
}

impl ResolveArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let normalizer = Arc::new(load_normalizer(config)?);
        let resolver = build_resolver(config, normalizer, Arc::new(SystemClock));

        let game = resolver
            .resolve(
                self.sport,
                self.date,
                &self.away,
                &self.home,
                self.player_team.as_deref(),
            )
            .await?;

        match game {
            Some(game) => println!("{}", serde_json::to_string_pretty(game.as_ref())?),
            None => println!("No game found for {} @ {} around {}", self.away, self.home, self.date),
        }
        Ok(())
    }
}
