//! Settlement State Machine
//!
//! Leg lifecycle, hit decisions, bet status rollup and the guards that keep
//! terminal results from ever being overwritten.

mod bet;
mod leg;
mod merge;
mod validation;

pub use bet::{apply_bet_status, derive_bet_status, is_archivable};
pub use leg::{decide_hit, is_closed, refresh_leg, repair_stuck_period, settle_leg, RefreshOutcome};
pub use merge::{merge_bet, merge_leg};
pub use validation::{plausible_range, validate_achieved, validate_game_transition, ValidationError};
