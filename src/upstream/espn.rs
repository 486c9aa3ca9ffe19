//! Scoreboard API client
//!
//! Reads the public site API: `{sport}/scoreboard?dates=YYYYMMDD` for the
//! events on a date and `{sport}/summary?event={id}` for box scores and
//! scoring plays. Responses are loosely shaped; everything optional is
//! defaulted rather than rejected.

use super::{GameSource, GameSummary, ScheduledEvent, TeamSide, UpstreamError};
use crate::bet::{GameStatus, Sport};
use crate::boxscore::{nullable, BoxScore, ScoringPlay, TeamRef};
use crate::config::UpstreamConfig;
use crate::telemetry::{self, CounterMetric};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Site API base URL
pub const ESPN_API_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Configuration for the scoreboard client
#[derive(Debug, Clone)]
pub struct EspnConfig {
    /// Base URL, sport paths are appended
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for EspnConfig {
    fn default() -> Self {
        Self {
            base_url: ESPN_API_URL.to_string(),
            timeout: Duration::from_secs(8),
        }
    }
}

impl From<&UpstreamConfig> for EspnConfig {
    fn from(config: &UpstreamConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }
}

/// Client for the scoreboard and summary endpoints
pub struct EspnClient {
    config: EspnConfig,
    client: Client,
}

impl Default for EspnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EspnClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(EspnConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: EspnConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("parlay-settle/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    pub fn config(&self) -> &EspnConfig {
        &self.config
    }

    fn scoreboard_url(&self, sport: Sport) -> String {
        format!("{}/{}/scoreboard", self.config.base_url, sport.api_path())
    }

    fn summary_url(&self, sport: Sport) -> String {
        format!("{}/{}/summary", self.config.base_url, sport.api_path())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        endpoint: &'static str,
    ) -> Result<T, UpstreamError> {
        tracing::debug!(url = %url, ?query, "Fetching from scoreboard API");
        telemetry::increment(CounterMetric::UpstreamRequests, &[("endpoint", endpoint)]);

        let result = self.send(url, query).await;
        if let Err(e) = &result {
            tracing::warn!(url = %url, error = %e, "Scoreboard API request failed");
            telemetry::increment(CounterMetric::UpstreamFailures, &[("endpoint", endpoint)]);
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GameSource for EspnClient {
    async fn scoreboard(
        &self,
        sport: Sport,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledEvent>, UpstreamError> {
        let url = self.scoreboard_url(sport);
        let query = [("dates", date.format("%Y%m%d").to_string())];
        let response: ScoreboardResponse = self.get(&url, &query, "scoreboard").await?;

        let events: Vec<ScheduledEvent> = response
            .events
            .into_iter()
            .filter_map(|e| e.into_scheduled(sport, date))
            .collect();

        tracing::debug!(sport = %sport, %date, events = events.len(), "Fetched scoreboard");
        Ok(events)
    }

    async fn summary(&self, sport: Sport, event_id: &str) -> Result<GameSummary, UpstreamError> {
        let url = self.summary_url(sport);
        let query = [("event", event_id.to_string())];
        let response: SummaryResponse = self.get(&url, &query, "summary").await?;

        Ok(GameSummary {
            boxscore: response.boxscore.players,
            scoring_plays: response.scoring_plays,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ScoreboardResponse {
    #[serde(default, deserialize_with = "nullable")]
    events: Vec<EspnEvent>,
}

#[derive(Debug, Default, Deserialize)]
struct EspnEvent {
    #[serde(default, deserialize_with = "nullable")]
    id: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    competitions: Vec<EspnCompetition>,
    #[serde(default)]
    status: Option<EspnStatus>,
}

#[derive(Debug, Default, Deserialize)]
struct EspnCompetition {
    #[serde(default, deserialize_with = "nullable")]
    competitors: Vec<EspnCompetitor>,
    #[serde(default)]
    status: Option<EspnStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EspnCompetitor {
    #[serde(default, deserialize_with = "nullable")]
    home_away: String,
    #[serde(default)]
    score: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "nullable")]
    team: TeamRef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EspnStatus {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    status_type: EspnStatusType,
    #[serde(default, deserialize_with = "nullable")]
    period: u32,
    #[serde(default, deserialize_with = "nullable")]
    display_clock: String,
}

#[derive(Debug, Default, Deserialize)]
struct EspnStatusType {
    #[serde(default, deserialize_with = "nullable")]
    name: String,
    #[serde(default, deserialize_with = "nullable")]
    completed: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    #[serde(default, deserialize_with = "nullable")]
    boxscore: EspnBoxscore,
    #[serde(default, deserialize_with = "nullable")]
    scoring_plays: Vec<ScoringPlay>,
}

#[derive(Debug, Default, Deserialize)]
struct EspnBoxscore {
    #[serde(default, deserialize_with = "nullable")]
    players: BoxScore,
}

impl EspnEvent {
    fn into_scheduled(self, sport: Sport, date: NaiveDate) -> Option<ScheduledEvent> {
        let competition = self.competitions.into_iter().next()?;
        let mut home = None;
        let mut away = None;
        for competitor in competition.competitors {
            let side = TeamSide {
                name: competitor.team.display_name,
                short_name: competitor.team.short_display_name,
                abbreviation: competitor.team.abbreviation,
                score: parse_score(competitor.score.as_ref()),
            };
            match competitor.home_away.to_ascii_lowercase().as_str() {
                "home" => home = Some(side),
                "away" => away = Some(side),
                _ => {}
            }
        }

        let (Some(home), Some(away)) = (home, away) else {
            tracing::debug!(event_id = %self.id, "Skipping event without home and away teams");
            return None;
        };

        let status = self.status.or(competition.status).unwrap_or_default();
        let mut game_status = GameStatus::from_upstream(&status.status_type.name);
        if status.status_type.completed && game_status == GameStatus::Unknown {
            game_status = GameStatus::Final;
        }

        Some(ScheduledEvent {
            id: self.id,
            sport,
            date,
            start_time: self.date.as_deref().and_then(parse_event_time),
            home,
            away,
            status: game_status,
            period: status.period,
            clock: status.display_clock,
        })
    }
}

fn parse_score(value: Option<&serde_json::Value>) -> u32 {
    match value {
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(serde_json::Value::Number(n)) => n.as_u64().map(|n| n as u32).unwrap_or(0),
        _ => 0,
    }
}

/// Event times come as "2025-11-10T01:15Z" (no seconds) or full RFC 3339
fn parse_event_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|t| t.and_utc())
}
