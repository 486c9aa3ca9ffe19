//! Prometheus metrics

use metrics::Label;
use std::time::Duration;

/// Counter metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMetric {
    /// Scoreboard and summary requests sent upstream
    UpstreamRequests,
    /// Upstream requests that timed out or returned non-success
    UpstreamFailures,
    /// Game documents served from the event cache
    CacheHits,
    /// Game documents fetched because the cache was cold or stale
    CacheMisses,
    /// Legs moved to won or lost
    LegsSettled,
    /// Achieved values rejected as implausible
    ValidationRejections,
    /// Bets moved out of the active set
    BetsArchived,
    /// Scheduler job runs
    JobRuns,
}

impl CounterMetric {
    pub fn name(&self) -> &'static str {
        match self {
            CounterMetric::UpstreamRequests => "parlay_upstream_requests_total",
            CounterMetric::UpstreamFailures => "parlay_upstream_failures_total",
            CounterMetric::CacheHits => "parlay_cache_hits_total",
            CounterMetric::CacheMisses => "parlay_cache_misses_total",
            CounterMetric::LegsSettled => "parlay_legs_settled_total",
            CounterMetric::ValidationRejections => "parlay_validation_rejections_total",
            CounterMetric::BetsArchived => "parlay_bets_archived_total",
            CounterMetric::JobRuns => "parlay_job_runs_total",
        }
    }
}

/// Gauge metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeMetric {
    /// Bets still in the active polling set
    ActiveBets,
    /// Entries currently held by the event cache
    CachedGames,
}

impl GaugeMetric {
    pub fn name(&self) -> &'static str {
        match self {
            GaugeMetric::ActiveBets => "parlay_active_bets",
            GaugeMetric::CachedGames => "parlay_cached_games",
        }
    }
}

/// Increment a counter by one
pub fn increment(metric: CounterMetric, labels: &[(&'static str, &str)]) {
    let labels: Vec<Label> = labels
        .iter()
        .map(|(k, v)| Label::new(*k, v.to_string()))
        .collect();
    metrics::counter!(metric.name(), labels).increment(1);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    metrics::gauge!(metric.name()).set(value);
}

/// Record how long one job run took
pub fn record_job_duration(job: &str, duration: Duration) {
    metrics::histogram!("parlay_job_duration_seconds", "job" => job.to_string())
        .record(duration.as_secs_f64());
}
