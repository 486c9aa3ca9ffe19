//! In-memory bet store with JSON snapshots

use super::{BetCursor, BetStore, StoreError};
use crate::bet::{Bet, BetStatus};
use crate::settlement::merge_bet;
use crate::telemetry::audit;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Bets held in memory behind a single lock. Each commit swaps one bet row
/// under the write lock, so a unit of work lands whole or not at all.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bets: RwLock<HashMap<Uuid, Bet>>,
    fail_commits: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bets(bets: impl IntoIterator<Item = Bet>) -> Self {
        Self {
            bets: RwLock::new(bets.into_iter().map(|b| (b.id, b)).collect()),
            fail_commits: AtomicBool::new(false),
        }
    }

    /// Load a snapshot written by [`MemoryStore::save_json`]. A missing file
    /// yields an empty store.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No bet snapshot, starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let bets: Vec<Bet> = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), bets = bets.len(), "Loaded bet snapshot");
        Ok(Self::with_bets(bets))
    }

    /// Write every bet to `path`, replacing the file atomically
    pub async fn save_json(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let bets = self.snapshot().await;
        let content = serde_json::to_string_pretty(&bets)?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, path).await?;
        tracing::info!(path = %path.display(), bets = bets.len(), "Saved bet snapshot");
        Ok(())
    }

    /// Every bet, oldest first
    pub async fn snapshot(&self) -> Vec<Bet> {
        let bets = self.bets.read().await;
        let mut all: Vec<Bet> = bets.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        all
    }

    /// Make subsequent commits fail, as a lost database connection would
    pub fn set_fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BetStore for MemoryStore {
    async fn active_bets(&self, limit: usize) -> Result<Vec<Bet>, StoreError> {
        self.active_bets_after(None, limit).await
    }

    async fn active_bets_after(
        &self,
        after: Option<BetCursor>,
        limit: usize,
    ) -> Result<Vec<Bet>, StoreError> {
        let mut active: Vec<Bet> = self
            .snapshot()
            .await
            .into_iter()
            .filter(|b| b.is_active)
            .filter(|b| after.map_or(true, |cursor| BetCursor::of(b) > cursor))
            .collect();
        active.truncate(limit);
        Ok(active)
    }

    async fn all_bets(&self, limit: usize) -> Result<Vec<Bet>, StoreError> {
        let mut all = self.snapshot().await;
        all.truncate(limit);
        Ok(all)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Bet>, StoreError> {
        Ok(self.bets.read().await.get(&id).cloned())
    }

    async fn insert(&self, bet: Bet) -> Result<(), StoreError> {
        let mut bets = self.bets.write().await;
        if bets.contains_key(&bet.id) {
            return Err(StoreError::Duplicate(bet.id));
        }
        bets.insert(bet.id, bet);
        Ok(())
    }

    async fn commit(&self, bet: &Bet) -> Result<Bet, StoreError> {
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("commit rejected".to_string()));
        }

        let mut bets = self.bets.write().await;
        let stored = bets.get(&bet.id).ok_or(StoreError::NotFound(bet.id))?;
        let merged = merge_bet(stored, bet);
        bets.insert(merged.id, merged.clone());
        Ok(merged)
    }

    async fn override_status(&self, id: Uuid, status: BetStatus) -> Result<Bet, StoreError> {
        let mut bets = self.bets.write().await;
        let bet = bets.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        let from = bet.status;
        bet.status = status;
        if !status.is_terminal() {
            bet.is_active = true;
        }
        bet.updated_at = Some(chrono::Utc::now());
        audit::status_override(id, from, status);
        Ok(bet.clone())
    }
}
