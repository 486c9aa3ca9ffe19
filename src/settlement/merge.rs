//! Guarded merge of a worked copy into the stored row
//!
//! Jobs and manual refreshes work on copies and may race. Merging keeps
//! every terminal fact already stored: settled legs, hit flags, final game
//! status, final achieved values, terminal bet status and archival.

use super::bet::derive_bet_status;
use crate::bet::{Bet, Leg};

/// Merge an updated leg over the stored one
pub fn merge_leg(stored: &Leg, incoming: &Leg) -> Leg {
    if stored.status.is_terminal() {
        return stored.clone();
    }

    let mut merged = incoming.clone();

    if stored.game_status.is_final() && !incoming.game_status.is_final() {
        merged.game_status = stored.game_status;
        merged.home_score = stored.home_score;
        merged.away_score = stored.away_score;
    }

    if stored.value_final && !incoming.value_final {
        merged.achieved_value = stored.achieved_value;
        merged.achieved_label = stored.achieved_label.clone();
        merged.value_final = true;
    }

    if merged.is_hit.is_none() {
        merged.is_hit = stored.is_hit;
    }

    merged
}

/// Merge an updated bet over the stored one, leg by leg
pub fn merge_bet(stored: &Bet, incoming: &Bet) -> Bet {
    let mut legs: Vec<Leg> = incoming
        .legs
        .iter()
        .map(|leg| match stored.leg(leg.id) {
            Some(prev) => merge_leg(prev, leg),
            None => leg.clone(),
        })
        .collect();

    // legs leave only with their bet
    for prev in &stored.legs {
        if incoming.leg(prev.id).is_none() {
            legs.push(prev.clone());
        }
    }

    let status = if stored.status.is_terminal() {
        stored.status
    } else {
        derive_bet_status(&legs)
    };

    Bet {
        id: stored.id,
        legs,
        wager: incoming.wager,
        odds: incoming.odds,
        payout: incoming.payout,
        status,
        is_active: stored.is_active && incoming.is_active,
        created_at: stored.created_at,
        updated_at: incoming.updated_at.or(stored.updated_at),
    }
}
