//! Game Resolver

use super::priority::{MatchPriority, Matchup};
use crate::bet::{GameStatus, Leg, Sport};
use crate::cache::{CacheKey, EventCache};
use crate::reference::NameNormalizer;
use crate::upstream::{GameDocument, GameSource, ScheduledEvent, UpstreamError};
use chrono::{Days, NaiveDate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of scoreboard days searched, starting at the leg's date
pub const DEFAULT_WINDOW_DAYS: u64 = 3;

/// Maps a leg's recorded date and teams to an upstream game
pub struct GameResolver {
    source: Arc<dyn GameSource>,
    normalizer: Arc<NameNormalizer>,
    cache: Arc<EventCache>,
    window_days: u64,
}

impl GameResolver {
    pub fn new(
        source: Arc<dyn GameSource>,
        normalizer: Arc<NameNormalizer>,
        cache: Arc<EventCache>,
    ) -> Self {
        Self {
            source,
            normalizer,
            cache,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_window_days(mut self, days: u64) -> Self {
        self.window_days = days.max(1);
        self
    }

    pub fn cache(&self) -> &EventCache {
        &self.cache
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    /// Cache key for a lookup, built from canonical team names
    pub fn cache_key(
        &self,
        sport: Sport,
        date: NaiveDate,
        away: &str,
        home: &str,
        player_team: Option<&str>,
    ) -> CacheKey {
        let matchup = Matchup {
            sport,
            away,
            home,
            player_team,
        };
        CacheKey {
            date,
            sport,
            away: self.normalizer.normalize(away, sport),
            home: self.normalizer.normalize(home, sport),
            player_team: matchup
                .player_team()
                .map(|team| self.normalizer.normalize(team, sport)),
        }
    }

    /// Resolve a game through the cache.
    ///
    /// `Ok(None)` means no scheduled game fits, which is a normal outcome.
    /// `Err` is a transient upstream failure.
    pub async fn resolve(
        &self,
        sport: Sport,
        date: NaiveDate,
        away: &str,
        home: &str,
        player_team: Option<&str>,
    ) -> Result<Option<Arc<GameDocument>>, UpstreamError> {
        let key = self.cache_key(sport, date, away, home, player_team);
        self.cache
            .get_or_fetch(key, || {
                self.fetch_uncached(sport, date, away, home, player_team)
            })
            .await
    }

    pub async fn resolve_leg(&self, leg: &Leg) -> Result<Option<Arc<GameDocument>>, UpstreamError> {
        self.resolve(
            leg.sport,
            leg.game_date,
            &leg.away_team,
            &leg.home_team,
            leg.player_team.as_deref(),
        )
        .await
    }

    /// Drop the cached document for a leg so the next lookup refetches
    pub async fn invalidate_leg(&self, leg: &Leg) -> bool {
        let key = self.cache_key(
            leg.sport,
            leg.game_date,
            &leg.away_team,
            &leg.home_team,
            leg.player_team.as_deref(),
        );
        self.cache.invalidate(&key).await
    }

    /// Resolve without consulting the cache.
    ///
    /// Walks the forward window day by day and keeps the candidate with the
    /// best (priority, day offset). Stops early once a candidate of the best
    /// possible priority is found. A day whose scoreboard cannot be fetched
    /// fails the whole lookup, since it may hold a better candidate than any
    /// later day.
    pub async fn fetch_uncached(
        &self,
        sport: Sport,
        date: NaiveDate,
        away: &str,
        home: &str,
        player_team: Option<&str>,
    ) -> Result<Option<GameDocument>, UpstreamError> {
        let matchup = Matchup {
            sport,
            away,
            home,
            player_team,
        };
        let best_possible = matchup.best_possible();

        let mut best: Option<(MatchPriority, u64, ScheduledEvent)> = None;

        for offset in 0..self.window_days {
            let Some(day) = date.checked_add_days(Days::new(offset)) else {
                break;
            };

            let events = match self.source.scoreboard(sport, day).await {
                Ok(events) => events,
                Err(e) => {
                    warn!(%sport, %day, error = %e, "Scoreboard fetch failed");
                    return Err(e);
                }
            };

            for event in events {
                let Some(priority) = matchup.priority(&event, &self.normalizer) else {
                    continue;
                };
                let better = best
                    .as_ref()
                    .map_or(true, |(p, o, _)| (priority, offset) < (*p, *o));
                if better {
                    best = Some((priority, offset, event));
                }
            }

            if best.as_ref().is_some_and(|(p, _, _)| *p == best_possible) {
                break;
            }
        }

        let Some((priority, offset, event)) = best else {
            debug!(%sport, %date, away, home, "No scheduled game matches");
            return Ok(None);
        };

        debug!(
            %sport,
            event_id = %event.id,
            ?priority,
            offset,
            home = %event.home.name,
            away = %event.away.name,
            "Resolved game"
        );

        if event.status == GameStatus::Scheduled {
            return Ok(Some(GameDocument::without_summary(event)));
        }

        let summary = self.source.summary(sport, &event.id).await?;
        Ok(Some(GameDocument::new(event, summary)))
    }
}

impl std::fmt::Debug for GameResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameResolver")
            .field("window_days", &self.window_days)
            .field("cache", &self.cache)
            .finish()
    }
}
