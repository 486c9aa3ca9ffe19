//! Team and player name normalization

use super::matching::{best_match, clean_name, contains_phrase};
use super::{PlayerEntry, ReferenceDirectory, TeamEntry};
use crate::bet::Sport;

/// Team names that stand for "not known yet"
const PLACEHOLDERS: &[&str] = &[
    "",
    "tbd",
    "tba",
    "unknown",
    "unknown team",
    "n a",
    "na",
    "none",
    "opponent",
    "team",
];

/// Minimum similarity for a player lookup by edit distance
const PLAYER_SIMILARITY: f64 = 0.85;

/// True for empty or placeholder team names such as "TBD"
pub fn is_placeholder(raw: &str) -> bool {
    PLACEHOLDERS.contains(&clean_name(raw).as_str())
}

/// Canonicalizes team and player spellings against a reference directory
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    directory: ReferenceDirectory,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new(ReferenceDirectory::builtin())
    }
}

impl NameNormalizer {
    pub fn new(directory: ReferenceDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &ReferenceDirectory {
        &self.directory
    }

    /// Canonical short name of a team, or the input lower-cased when no
    /// team matches. Never fails.
    pub fn normalize(&self, raw: &str, sport: Sport) -> String {
        match self.lookup(raw, sport) {
            Some(team) => team.short.clone(),
            None => raw.trim().to_lowercase(),
        }
    }

    /// Find the team a raw name refers to.
    ///
    /// Order: exact name/short/abbreviation, nickname, containment, then
    /// repair of a name that belongs to another league by way of the shared
    /// abbreviation.
    pub fn lookup(&self, raw: &str, sport: Sport) -> Option<&TeamEntry> {
        let key = clean_name(raw);
        if is_placeholder(&key) {
            return None;
        }

        if let Some(team) = self.lookup_in_sport(&key, sport) {
            return Some(team);
        }

        for other in Sport::ALL.into_iter().filter(|s| *s != sport) {
            let Some(foreign) = self.lookup_in_sport(&key, other) else {
                continue;
            };
            if let Some(team) = self
                .directory
                .teams(sport)
                .find(|t| t.abbr.eq_ignore_ascii_case(&foreign.abbr))
            {
                tracing::debug!(
                    raw = raw,
                    from = %other,
                    to = %sport,
                    team = %team.short,
                    "Repaired cross-league team name"
                );
                return Some(team);
            }
        }

        None
    }

    fn lookup_in_sport(&self, key: &str, sport: Sport) -> Option<&TeamEntry> {
        let exact = self.directory.teams(sport).find(|t| {
            clean_name(&t.name) == key
                || clean_name(&t.short) == key
                || t.abbr.eq_ignore_ascii_case(key)
        });
        if exact.is_some() {
            return exact;
        }

        let nickname = self
            .directory
            .teams(sport)
            .find(|t| t.nicknames.iter().any(|n| clean_name(n) == key));
        if nickname.is_some() {
            return nickname;
        }

        // "LA Chargers" names the team; "Kansas City" is part of the full name
        let named = self
            .directory
            .teams(sport)
            .find(|t| contains_phrase(key, &clean_name(&t.short)));
        if named.is_some() {
            return named;
        }

        if key.len() < 3 {
            return None;
        }
        self.directory
            .teams(sport)
            .find(|t| contains_phrase(&clean_name(&t.name), key))
    }

    /// Whether two raw names refer to the same team.
    ///
    /// Falls back to word-bounded containment for teams missing from the
    /// directory. Placeholders never match.
    pub fn same_team(&self, a: &str, b: &str, sport: Sport) -> bool {
        if is_placeholder(a) || is_placeholder(b) {
            return false;
        }
        match (self.lookup(a, sport), self.lookup(b, sport)) {
            (Some(x), Some(y)) => x.abbr.eq_ignore_ascii_case(&y.abbr),
            _ => {
                let (ca, cb) = (clean_name(a), clean_name(b));
                ca == cb || contains_phrase(&ca, &cb) || contains_phrase(&cb, &ca)
            }
        }
    }

    /// Find a known player by name or alias
    pub fn find_player(&self, raw: &str, sport: Sport) -> Option<&PlayerEntry> {
        let key = clean_name(raw);
        if key.is_empty() {
            return None;
        }

        let players: Vec<&PlayerEntry> = self.directory.players(sport).collect();
        if let Some(player) = players.iter().copied().find(|p| {
            clean_name(&p.name) == key || p.aliases.iter().any(|a| clean_name(a) == key)
        }) {
            return Some(player);
        }

        best_match(&players, |p| p.name.as_str(), raw, PLAYER_SIMILARITY).copied()
    }
}
