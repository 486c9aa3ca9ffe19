//! Typed box-score document
//!
//! Mirrors the summary endpoint's `boxscore.players` and `scoringPlays`
//! arrays. Every field is optional upstream; absent or `null` values
//! deserialize to empty defaults instead of failing the whole document.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as the type's default
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept stat cells written as strings, numbers or `null`
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect())
}

/// Per-team statistic groups for one game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxScore {
    pub teams: Vec<TeamBox>,
}

impl BoxScore {
    pub fn is_empty(&self) -> bool {
        self.teams.iter().all(|t| t.statistics.is_empty())
    }

    /// Category blocks whose name matches `category`
    pub fn categories<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a StatCategory> {
        self.teams
            .iter()
            .flat_map(|t| t.statistics.iter())
            .filter(move |c| c.matches(category))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamBox {
    #[serde(default, deserialize_with = "nullable")]
    pub team: TeamRef,
    #[serde(default, deserialize_with = "nullable")]
    pub statistics: Vec<StatCategory>,
}

/// Team reference as it appears inside documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    #[serde(default, deserialize_with = "nullable")]
    pub display_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub short_display_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub abbreviation: String,
}

/// One category block: parallel `labels` and per-athlete `stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatCategory {
    /// Missing for sports whose box score is a single table
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub athletes: Vec<AthleteRow>,
}

impl StatCategory {
    /// Case-insensitive name match. An empty `category` matches an
    /// unlabeled block.
    pub fn matches(&self, category: &str) -> bool {
        let wanted = category.trim();
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if wanted.is_empty() {
            name.is_empty() || name.eq_ignore_ascii_case("none")
        } else {
            name.eq_ignore_ascii_case(wanted)
        }
    }

    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|l| l.trim().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteRow {
    #[serde(default, deserialize_with = "nullable")]
    pub athlete: AthleteRef,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub stats: Vec<String>,
}

impl AthleteRow {
    pub fn name(&self) -> &str {
        &self.athlete.display_name
    }

    pub fn stat(&self, index: usize) -> Option<&str> {
        self.stats.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRef {
    #[serde(default, deserialize_with = "nullable")]
    pub display_name: String,
}

/// A play that changed the score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringPlay {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub play_type: PlayType,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub team: TeamRef,
    #[serde(default, deserialize_with = "nullable")]
    pub participants: Vec<Participant>,
}

impl ScoringPlay {
    pub fn is_touchdown(&self) -> bool {
        self.play_type.text.to_lowercase().contains("touchdown")
    }

    pub fn is_passing_touchdown(&self) -> bool {
        let text = self.play_type.text.to_lowercase();
        text.contains("passing") && text.contains("touchdown")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayType {
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
}

/// Athlete credited on a scoring play
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, deserialize_with = "nullable")]
    pub athlete: AthleteRef,
    /// e.g. "scorer", "passer", "kicker"
    #[serde(rename = "type", default)]
    pub role: Option<String>,
}

impl Participant {
    pub fn name(&self) -> &str {
        &self.athlete.display_name
    }

    pub fn is_passer(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("passer"))
    }

    pub fn is_kicker(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.to_lowercase().contains("kick"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_summary_players() {
        let json = r#"[
            {
                "team": {"displayName": "Dallas Cowboys", "abbreviation": "DAL"},
                "statistics": [
                    {
                        "name": "passing",
                        "labels": ["C/ATT", "YDS", "TD", "INT"],
                        "athletes": [
                            {"athlete": {"displayName": "Dak Prescott"}, "stats": ["22/31", "210", "2", 0]}
                        ]
                    },
                    {"name": null, "labels": null, "athletes": null}
                ]
            },
            {"team": null}
        ]"#;

        let boxscore: BoxScore = serde_json::from_str(json).unwrap();
        assert_eq!(boxscore.teams.len(), 2);
        assert_eq!(boxscore.teams[0].team.abbreviation, "DAL");

        let passing = &boxscore.teams[0].statistics[0];
        assert_eq!(passing.label_index("yds"), Some(1));
        assert_eq!(passing.athletes[0].stat(3), Some("0"));
        assert!(boxscore.teams[0].statistics[1].matches(""));
        assert_eq!(boxscore.teams[1].team, TeamRef::default());
    }

    #[test]
    fn test_category_matching() {
        let unnamed = StatCategory::default();
        assert!(unnamed.matches(""));
        assert!(!unnamed.matches("passing"));

        let none = StatCategory {
            name: Some("None".to_string()),
            ..Default::default()
        };
        assert!(none.matches(""));

        let rushing = StatCategory {
            name: Some("Rushing".to_string()),
            ..Default::default()
        };
        assert!(rushing.matches("rushing"));
        assert!(!rushing.matches(""));
    }

    #[test]
    fn test_scoring_play_kinds() {
        let json = r#"{
            "type": {"text": "Passing Touchdown"},
            "text": "Jalen Hurts 12 Yd pass to A.J. Brown (Jake Elliott Kick)",
            "participants": [
                {"athlete": {"displayName": "A.J. Brown"}, "type": "scorer"},
                {"athlete": {"displayName": "Jalen Hurts"}, "type": "passer"}
            ]
        }"#;
        let play: ScoringPlay = serde_json::from_str(json).unwrap();
        assert!(play.is_touchdown());
        assert!(play.is_passing_touchdown());
        assert!(play.participants[1].is_passer());
        assert!(!play.participants[0].is_passer());

        let fg: ScoringPlay = serde_json::from_str(r#"{"type": {"text": "Field Goal"}}"#).unwrap();
        assert!(!fg.is_touchdown());
        assert!(fg.participants.is_empty());
    }

    #[test]
    fn test_empty_boxscore() {
        let boxscore: BoxScore = serde_json::from_str("[]").unwrap();
        assert!(boxscore.is_empty());
        assert_eq!(boxscore.categories("passing").count(), 0);
    }
}
