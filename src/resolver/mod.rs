//! Game Resolver
//!
//! Finds the upstream game a leg refers to from its recorded date and team
//! names. The search covers a short forward window because slips bundle
//! adjacent-day games and upstream dates are imprecise. Recorded teams may
//! be swapped or placeholders; the player's own team, when known, is the
//! strongest signal.

mod game;
mod priority;

pub use game::{GameResolver, DEFAULT_WINDOW_DAYS};
pub use priority::{MatchPriority, Matchup};
