//! Configuration types for parlay-settle

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Scoreboard/summary API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Root of the sports API, sport paths are appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://site.api.espn.com/apis/site/v2/sports".to_string()
}
fn default_timeout_secs() -> u64 {
    8
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Event cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a fetched game document stays fresh (seconds)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Game resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Days searched forward from a leg's nominal date, inclusive of that date
    #[serde(default = "default_search_window_days")]
    pub search_window_days: u32,
}

fn default_search_window_days() -> u32 {
    3
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            search_window_days: default_search_window_days(),
        }
    }
}

/// Automation scheduler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum bets loaded per job run
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Bets processed concurrently within one job run
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Minimum gap between resolution attempts for an unlinked leg (seconds)
    #[serde(default = "default_orphan_retry_secs")]
    pub orphan_retry_secs: u64,

    #[serde(default)]
    pub intervals: JobIntervals,
}

fn default_batch_size() -> usize {
    100
}
fn default_concurrency() -> usize {
    4
}
fn default_orphan_retry_secs() -> u64 {
    900
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            concurrency: default_concurrency(),
            orphan_retry_secs: default_orphan_retry_secs(),
            intervals: JobIntervals::default(),
        }
    }
}

/// Per-job run intervals (seconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobIntervals {
    #[serde(default = "default_live_refresh_secs")]
    pub live_refresh_secs: u64,
    #[serde(default = "default_finalize_secs")]
    pub finalize_secs: u64,
    #[serde(default = "default_hit_status_secs")]
    pub hit_status_secs: u64,
    #[serde(default = "default_archive_secs")]
    pub archive_secs: u64,
    #[serde(default = "default_orphan_repair_secs")]
    pub orphan_repair_secs: u64,
    #[serde(default = "default_name_standardize_secs")]
    pub name_standardize_secs: u64,
}

fn default_live_refresh_secs() -> u64 {
    60
}
fn default_finalize_secs() -> u64 {
    300
}
fn default_hit_status_secs() -> u64 {
    120
}
fn default_archive_secs() -> u64 {
    600
}
fn default_orphan_repair_secs() -> u64 {
    1800
}
fn default_name_standardize_secs() -> u64 {
    86400 // once a day
}

impl Default for JobIntervals {
    fn default() -> Self {
        Self {
            live_refresh_secs: default_live_refresh_secs(),
            finalize_secs: default_finalize_secs(),
            hit_status_secs: default_hit_status_secs(),
            archive_secs: default_archive_secs(),
            orphan_repair_secs: default_orphan_repair_secs(),
            name_standardize_secs: default_name_standardize_secs(),
        }
    }
}

/// Reference directory configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Optional TOML file with extra teams and players
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Bet snapshot used by the command-line tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormatConfig,

    /// Prometheus scrape port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

/// Log output format as written in the config file
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormatConfig::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
