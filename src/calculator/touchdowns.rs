//! Touchdown props
//!
//! Counts exclude passing touchdowns: a quarterback who only throws scores
//! zero on an anytime-touchdown leg.

use super::table::TOUCHDOWN_SOURCES;
use crate::boxscore::{extract_stat, ScoringPlay};
use crate::reference::matching::{clean_name, contains_all_tokens, contains_phrase, initial_last_match};
use crate::upstream::GameDocument;
use rust_decimal::Decimal;

/// Non-passing touchdowns scored by `player`.
///
/// Sums the box-score TD columns; when that is zero, counts touchdown
/// scoring plays crediting the player as ball carrier instead.
pub fn touchdown_count(player: &str, game: &GameDocument) -> Decimal {
    let from_boxscore: Decimal = TOUCHDOWN_SOURCES
        .iter()
        .flat_map(|source| {
            source
                .categories
                .iter()
                .map(move |category| extract_stat(player, category, source.label, &game.boxscore))
        })
        .sum();

    if from_boxscore > Decimal::ZERO {
        return from_boxscore;
    }

    let from_plays = game
        .touchdown_plays()
        .filter(|play| credits_scorer(play, player))
        .count();
    if from_plays > 0 {
        tracing::debug!(player, touchdowns = from_plays, "Touchdowns taken from scoring plays");
    }
    Decimal::from(from_plays)
}

/// 1 when `player` scored the first touchdown of the game, else 0
pub fn first_touchdown_scorer(player: &str, game: &GameDocument) -> Decimal {
    flag(
        game.touchdown_plays()
            .next()
            .and_then(scorer_name)
            .is_some_and(|scorer| names_match(&scorer, player)),
    )
}

/// 1 when `player` scored the last touchdown of the game, else 0
pub fn last_touchdown_scorer(player: &str, game: &GameDocument) -> Decimal {
    flag(
        game.touchdown_plays()
            .next_back()
            .and_then(scorer_name)
            .is_some_and(|scorer| names_match(&scorer, player)),
    )
}

fn flag(set: bool) -> Decimal {
    if set {
        Decimal::ONE
    } else {
        Decimal::ZERO
    }
}

fn names_match(candidate: &str, player: &str) -> bool {
    contains_all_tokens(candidate, player)
        || contains_all_tokens(player, candidate)
        || initial_last_match(candidate, player)
}

/// Whether a touchdown play credits `player` as the one who scored
fn credits_scorer(play: &ScoringPlay, player: &str) -> bool {
    if !play.participants.is_empty() {
        let has_roles = play.participants.iter().any(|p| p.role.is_some());
        if has_roles {
            return play
                .participants
                .iter()
                .filter(|p| !p.is_passer() && !p.is_kicker())
                .any(|p| names_match(p.name(), player));
        }
        // Without roles only the lead participant of a passing score is the receiver
        if play.is_passing_touchdown() {
            return play
                .participants
                .first()
                .is_some_and(|p| names_match(p.name(), player));
        }
        return play.participants.iter().any(|p| names_match(p.name(), player));
    }

    scorer_from_text(play).is_some_and(|segment| text_names(&segment, player))
}

/// Name of the lead scorer of a play
fn scorer_name(play: &ScoringPlay) -> Option<String> {
    let lead = play
        .participants
        .iter()
        .find(|p| p.role.is_none() || (!p.is_passer() && !p.is_kicker()))
        .map(|p| p.name().to_string())
        .filter(|n| !n.is_empty());

    lead.or_else(|| scorer_from_text(play))
}

/// Scorer part of a description such as
/// "Jalen Hurts 12 Yd pass to A.J. Brown (Jake Elliott Kick)"
fn scorer_from_text(play: &ScoringPlay) -> Option<String> {
    // the conversion attempt in parentheses names the kicker
    let description = play.text.split('(').next().unwrap_or_default();
    let lower = description.to_lowercase();

    let scorer: String = match lower.find(" pass to ") {
        Some(pos) => description
            .get(pos + " pass to ".len()..)
            .unwrap_or_default()
            .split_whitespace()
            .take_while(|w| !w.eq_ignore_ascii_case("for"))
            .collect::<Vec<_>>()
            .join(" "),
        None if play.is_passing_touchdown() => return None,
        None => description
            .split_whitespace()
            .take_while(|w| !w.starts_with(|c: char| c.is_ascii_digit()))
            .collect::<Vec<_>>()
            .join(" "),
    };

    (!scorer.is_empty()).then_some(scorer)
}

fn text_names(segment: &str, player: &str) -> bool {
    if names_match(segment, player) {
        return true;
    }
    // descriptions often carry only the last name
    let cleaned = clean_name(player);
    cleaned
        .rsplit(' ')
        .next()
        .is_some_and(|last| last.len() > 2 && contains_phrase(&clean_name(segment), last))
}
