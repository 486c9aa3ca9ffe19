//! Bet data model
//!
//! Bets, legs, their status enums and the closed set of canonical stat types

mod stat;
mod types;

pub use stat::StatType;
pub use types::{
    Bet, BetCategory, BetStatus, GameStatus, Leg, LegCounts, LegStatus, LineDirection, Sport,
};
