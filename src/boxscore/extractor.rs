//! Stat Extractor

use super::{AthleteRow, BoxScore};
use crate::reference::matching::best_match;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Minimum name similarity for the edit-distance fallback
pub const MIN_NAME_SIMILARITY: f64 = 0.6;

/// Read one statistic for a player from a box score.
///
/// `category` is matched case-insensitively against the category blocks (an
/// empty string matches an unlabeled block) and `label` against the block's
/// column labels. Returns 0 when the block, label or player is missing or the
/// cell does not parse; a real zero looks the same.
pub fn extract_stat(player: &str, category: &str, label: &str, boxscore: &BoxScore) -> Decimal {
    let rows: Vec<(&AthleteRow, usize)> = boxscore
        .categories(category)
        .filter_map(|block| block.label_index(label).map(|idx| (block, idx)))
        .flat_map(|(block, idx)| block.athletes.iter().map(move |row| (row, idx)))
        .collect();

    let Some((row, idx)) = best_match(&rows, |(row, _)| row.name(), player, MIN_NAME_SIMILARITY)
    else {
        tracing::trace!(player, category, label, "Stat not found in box score");
        return Decimal::ZERO;
    };

    row.stat(*idx)
        .and_then(parse_stat_value)
        .unwrap_or(Decimal::ZERO)
}

/// Parse a box-score cell.
///
/// "made-attempted" pairs ("2-5", "22/31") yield the made count, a leading
/// "+" is accepted, and placeholders such as "--" yield `None`.
pub fn parse_stat_value(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);

    let made = match raw.find(['-', '/']) {
        // a leading minus is a sign, not a separator
        Some(pos) if pos > 0 => &raw[..pos],
        _ => raw,
    };

    Decimal::from_str(made.trim()).ok()
}
