//! TTL-bounded cache of resolved game documents

use super::Clock;
use crate::bet::Sport;
use crate::telemetry::{increment, set_gauge, CounterMetric, GaugeMetric};
use crate::upstream::{GameDocument, UpstreamError};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// What a document was resolved from. Team names are stored in canonical
/// form so spelling variants share one entry; the player's team is part of
/// the key because it changes which game a placeholder pairing resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub date: NaiveDate,
    pub sport: Sport,
    pub away: String,
    pub home: String,
    pub player_team: Option<String>,
}

struct CacheEntry {
    document: Arc<GameDocument>,
    fetched_at: DateTime<Utc>,
}

/// Game documents keyed by [`CacheKey`], evicted lazily once older than the
/// TTL or on explicit invalidation
pub struct EventCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl EventCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        let age = self.clock.now() - entry.fetched_at;
        age.to_std().map(|age| age < self.ttl).unwrap_or(true)
    }

    /// Fresh document for `key`, if cached
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<GameDocument>> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| self.is_fresh(entry))
            .map(|entry| Arc::clone(&entry.document))
    }

    /// Return the cached document for `key`, or run `fetch` and cache what it
    /// finds. "No game" and errors are not cached, so they are retried on the
    /// next call.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: CacheKey,
        fetch: F,
    ) -> Result<Option<Arc<GameDocument>>, UpstreamError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<GameDocument>, UpstreamError>>,
    {
        if let Some(document) = self.get(&key).await {
            increment(CounterMetric::CacheHits, &[("sport", key.sport.as_str())]);
            return Ok(Some(document));
        }
        increment(CounterMetric::CacheMisses, &[("sport", key.sport.as_str())]);

        let fetched = fetch().await?;

        let mut entries = self.entries.write().await;
        let document = match fetched {
            Some(document) => {
                let document = Arc::new(document);
                entries.insert(
                    key,
                    CacheEntry {
                        document: Arc::clone(&document),
                        fetched_at: self.clock.now(),
                    },
                );
                Some(document)
            }
            None => {
                entries.remove(&key);
                None
            }
        };
        set_gauge(GaugeMetric::CachedGames, entries.len() as f64);
        Ok(document)
    }

    /// Drop one entry so the next lookup refetches
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        let mut entries = self.entries.write().await;
        let removed = entries.remove(key).is_some();
        set_gauge(GaugeMetric::CachedGames, entries.len() as f64);
        removed
    }

    /// Drop every entry
    pub async fn invalidate_all(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
        set_gauge(GaugeMetric::CachedGames, 0.0);
    }

    /// Drop entries past the TTL
    pub async fn purge_stale(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| self.is_fresh(entry));
        set_gauge(GaugeMetric::CachedGames, entries.len() as f64);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl std::fmt::Debug for EventCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCache").field("ttl", &self.ttl).finish()
    }
}
