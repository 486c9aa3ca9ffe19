//! Persistence boundary for bets and legs
//!
//! The engine reads batches of bets, works on copies, and commits one bet at
//! a time. Commits merge with the stored row so terminal results written by
//! one writer are never undone by another.

mod memory;

pub use memory::MemoryStore;

use crate::bet::{Bet, BetStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("bet {0} not found")]
    NotFound(Uuid),

    #[error("bet {0} already exists")]
    Duplicate(Uuid),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Position in the (created_at, id) order of bets, used to page through the
/// active set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BetCursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

impl BetCursor {
    pub fn of(bet: &Bet) -> Self {
        Self {
            created_at: bet.created_at,
            id: bet.id,
        }
    }
}

/// Trait for bet persistence
#[async_trait]
pub trait BetStore: Send + Sync {
    /// Bets still in the polling set, oldest first
    async fn active_bets(&self, limit: usize) -> Result<Vec<Bet>, StoreError>;

    /// Active bets strictly after `after` in (created_at, id) order
    async fn active_bets_after(
        &self,
        after: Option<BetCursor>,
        limit: usize,
    ) -> Result<Vec<Bet>, StoreError>;

    /// Every bet, archived included, oldest first
    async fn all_bets(&self, limit: usize) -> Result<Vec<Bet>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Bet>, StoreError>;

    async fn insert(&self, bet: Bet) -> Result<(), StoreError>;

    /// Persist one unit of work, merged over the stored row under the
    /// terminal guards. Returns what was stored.
    async fn commit(&self, bet: &Bet) -> Result<Bet, StoreError>;

    /// Administrative status change, the only way out of a terminal status
    async fn override_status(&self, id: Uuid, status: BetStatus) -> Result<Bet, StoreError>;
}
