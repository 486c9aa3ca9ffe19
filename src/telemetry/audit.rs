//! Audit trail
//!
//! Every status or value change made by the engine is emitted on the
//! `audit` target so it can be routed to its own sink.

use crate::bet::{BetStatus, LegStatus};
use rust_decimal::Decimal;
use std::time::Duration;
use uuid::Uuid;

pub fn bet_status_changed(bet_id: Uuid, from: BetStatus, to: BetStatus, source: &str) {
    tracing::info!(
        target: "audit",
        bet_id = %bet_id,
        from = %from,
        to = %to,
        source,
        "Bet status changed"
    );
}

pub fn leg_value_changed(
    bet_id: Uuid,
    leg_id: Uuid,
    from: Option<Decimal>,
    to: Option<Decimal>,
    source: &str,
) {
    tracing::info!(
        target: "audit",
        bet_id = %bet_id,
        leg_id = %leg_id,
        from = ?from,
        to = ?to,
        source,
        "Leg achieved value changed"
    );
}

pub fn leg_settled(bet_id: Uuid, leg_id: Uuid, status: LegStatus, achieved: Decimal, target: Decimal) {
    tracing::info!(
        target: "audit",
        bet_id = %bet_id,
        leg_id = %leg_id,
        status = %status,
        achieved = %achieved,
        target = %target,
        "Leg settled"
    );
}

pub fn bet_archived(bet_id: Uuid, status: BetStatus) {
    tracing::info!(target: "audit", bet_id = %bet_id, status = %status, "Bet archived");
}

pub fn status_override(bet_id: Uuid, from: BetStatus, to: BetStatus) {
    tracing::warn!(
        target: "audit",
        bet_id = %bet_id,
        from = %from,
        to = %to,
        "Administrative status override"
    );
}

pub fn job_finished(job: &str, processed: usize, updated: usize, failed: usize, elapsed: Duration) {
    tracing::info!(
        target: "audit",
        job,
        processed,
        updated,
        failed,
        elapsed_ms = elapsed.as_millis() as u64,
        success = failed == 0,
        "Automation run finished"
    );
}
