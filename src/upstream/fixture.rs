//! In-process game source serving canned scoreboards
//!
//! Used to replay recorded data and to drive the resolver and scheduler
//! without network access.

use super::{GameSource, GameSummary, ScheduledEvent, UpstreamError};
use crate::bet::{GameStatus, Sport};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct FixtureSource {
    events: RwLock<Vec<ScheduledEvent>>,
    summaries: RwLock<HashMap<String, GameSummary>>,
    failing: AtomicBool,
    failing_dates: RwLock<HashSet<NaiveDate>>,
    scoreboard_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// List an event on its scoreboard date, replacing one with the same id
    pub fn add_event(&self, event: ScheduledEvent) {
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        events.retain(|e| e.id != event.id);
        events.push(event);
    }

    pub fn set_summary(&self, event_id: &str, summary: GameSummary) {
        self.summaries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(event_id.to_string(), summary);
    }

    /// Move a listed event to a new status and score
    pub fn update_event(&self, event_id: &str, status: GameStatus, home: u32, away: u32) {
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        if let Some(event) = events.iter_mut().find(|e| e.id == event_id) {
            event.status = status;
            event.home.score = home;
            event.away.score = away;
        }
    }

    /// Make every request fail as if the upstream timed out
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make scoreboard requests for one date fail, or succeed again
    pub fn set_date_failing(&self, date: NaiveDate, failing: bool) {
        let mut dates = self.failing_dates.write().unwrap_or_else(|e| e.into_inner());
        if failing {
            dates.insert(date);
        } else {
            dates.remove(&date);
        }
    }

    pub fn scoreboard_calls(&self) -> usize {
        self.scoreboard_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    fn check_failing(&self, what: &str) -> Result<(), UpstreamError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(UpstreamError::Unavailable(format!("{what} unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl GameSource for FixtureSource {
    async fn scoreboard(
        &self,
        sport: Sport,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledEvent>, UpstreamError> {
        self.scoreboard_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing("scoreboard")?;
        if self
            .failing_dates
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&date)
        {
            return Err(UpstreamError::Unavailable(format!("scoreboard for {date} unavailable")));
        }
        let events = self.events.read().unwrap_or_else(|e| e.into_inner());
        Ok(events
            .iter()
            .filter(|e| e.sport == sport && e.date == date)
            .cloned()
            .collect())
    }

    async fn summary(&self, _sport: Sport, event_id: &str) -> Result<GameSummary, UpstreamError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing("summary")?;
        let summaries = self.summaries.read().unwrap_or_else(|e| e.into_inner());
        Ok(summaries.get(event_id).cloned().unwrap_or_default())
    }
}
