//! Bet-level status rollup

use super::leg::is_closed;
use crate::bet::{Bet, BetStatus, Leg, LegStatus};

/// Roll leg statuses into a bet status.
///
/// Any live leg makes the bet live, else any pending leg keeps it pending.
/// With every leg settled the bet is won when all legs won and lost when
/// any lost.
pub fn derive_bet_status(legs: &[Leg]) -> BetStatus {
    if legs.iter().any(|l| l.status == LegStatus::Live) {
        BetStatus::Live
    } else if legs.iter().any(|l| l.status == LegStatus::Pending) {
        BetStatus::Pending
    } else if !legs.is_empty() && legs.iter().all(|l| l.status == LegStatus::Won) {
        BetStatus::Won
    } else if legs.iter().any(|l| l.status == LegStatus::Lost) {
        BetStatus::Lost
    } else {
        BetStatus::Completed
    }
}

/// Recompute the bet's status from its legs. A terminal bet status is kept.
/// Returns the `(from, to)` pair when the status moved.
pub fn apply_bet_status(bet: &mut Bet) -> Option<(BetStatus, BetStatus)> {
    if bet.status.is_terminal() {
        return None;
    }
    let next = derive_bet_status(&bet.legs);
    if next == bet.status {
        return None;
    }
    let from = bet.status;
    bet.status = next;
    Some((from, next))
}

/// Whether the bet can leave the active polling set: no leg's game is still
/// unresolved or in progress
pub fn is_archivable(bet: &Bet) -> bool {
    bet.is_active && bet.legs.iter().all(is_closed)
}
