//! Read-only team and player reference directory

use super::matching::clean_name;
use super::teams::{NICKNAMES, TEAMS};
use crate::bet::Sport;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading a reference file
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read reference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid reference file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One team with every spelling that should resolve to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub sport: Sport,
    /// Full name, e.g. "Dallas Cowboys"
    pub name: String,
    /// Canonical short form, e.g. "Cowboys"
    pub short: String,
    pub abbr: String,
    #[serde(default)]
    pub nicknames: Vec<String>,
}

impl TeamEntry {
    pub fn new(sport: Sport, name: &str, short: &str, abbr: &str) -> Self {
        Self {
            sport,
            name: name.to_string(),
            short: short.to_string(),
            abbr: abbr.to_string(),
            nicknames: Vec::new(),
        }
    }
}

/// A known player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub sport: Sport,
    pub name: String,
    /// Team short name
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    teams: Vec<TeamEntry>,
    #[serde(default)]
    players: Vec<PlayerEntry>,
}

/// Team and player lookup tables keyed by sport
#[derive(Debug, Clone, Default)]
pub struct ReferenceDirectory {
    teams: Vec<TeamEntry>,
    players: Vec<PlayerEntry>,
}

impl ReferenceDirectory {
    /// An empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory with every team of the four leagues and common nicknames
    pub fn builtin() -> Self {
        let mut directory = Self::new();
        for (sport, name, short, abbr) in TEAMS {
            directory.add_team(TeamEntry::new(*sport, name, short, abbr));
        }
        for (sport, nickname, short) in NICKNAMES {
            if let Some(team) = directory
                .teams
                .iter_mut()
                .find(|t| t.sport == *sport && t.short == *short)
            {
                team.nicknames.push(nickname.to_string());
            }
        }
        directory
    }

    /// Built-in directory extended with a TOML reference file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path)?;
        let mut directory = Self::builtin();
        directory.extend_from_toml(&content)?;
        Ok(directory)
    }

    /// Merge `[[teams]]` and `[[players]]` tables into the directory
    pub fn extend_from_toml(&mut self, content: &str) -> Result<(), ReferenceError> {
        let file: ReferenceFile = toml::from_str(content)?;
        let (teams, players) = (file.teams.len(), file.players.len());
        for team in file.teams {
            self.add_team(team);
        }
        for player in file.players {
            self.add_player(player);
        }
        tracing::debug!(teams, players, "Extended reference directory");
        Ok(())
    }

    /// Add a team, replacing one with the same sport and abbreviation
    pub fn add_team(&mut self, team: TeamEntry) {
        match self
            .teams
            .iter_mut()
            .find(|t| t.sport == team.sport && t.abbr.eq_ignore_ascii_case(&team.abbr))
        {
            Some(existing) => *existing = team,
            None => self.teams.push(team),
        }
    }

    /// Add a player, replacing one with the same sport and cleaned name
    pub fn add_player(&mut self, player: PlayerEntry) {
        let key = clean_name(&player.name);
        match self
            .players
            .iter_mut()
            .find(|p| p.sport == player.sport && clean_name(&p.name) == key)
        {
            Some(existing) => *existing = player,
            None => self.players.push(player),
        }
    }

    pub fn teams(&self, sport: Sport) -> impl Iterator<Item = &TeamEntry> {
        self.teams.iter().filter(move |t| t.sport == sport)
    }

    pub fn players(&self, sport: Sport) -> impl Iterator<Item = &PlayerEntry> {
        self.players.iter().filter(move |p| p.sport == sport)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
