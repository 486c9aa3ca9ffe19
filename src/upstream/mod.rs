//! Upstream scoreboard source
//!
//! Events by date and per-event summaries, consumed as best-effort JSON

mod espn;
mod fixture;
mod types;

pub use espn::{EspnClient, EspnConfig, ESPN_API_URL};
pub use fixture::FixtureSource;
pub use types::{GameDocument, GameSummary, ScheduledEvent, Side, TeamSide};

use crate::bet::Sport;
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Transient upstream failures. Never fatal: the affected legs are left
/// unchanged and retried on a later cycle.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

/// Trait for scoreboard sources
#[async_trait]
pub trait GameSource: Send + Sync {
    /// Events listed on a date's scoreboard
    async fn scoreboard(
        &self,
        sport: Sport,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledEvent>, UpstreamError>;

    /// Box score and scoring plays for one event
    async fn summary(&self, sport: Sport, event_id: &str) -> Result<GameSummary, UpstreamError>;
}
