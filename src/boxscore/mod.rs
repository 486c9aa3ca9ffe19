//! Box-score documents and the Stat Extractor
//!
//! The document model is a typed view of the upstream summary: categories
//! of labeled columns holding one row per athlete, plus scoring plays. The
//! extractor reads one number out of it and never fails.

mod document;
mod extractor;

pub(crate) use document::nullable;
pub use document::{
    AthleteRef, AthleteRow, BoxScore, Participant, PlayType, ScoringPlay, StatCategory, TeamBox,
    TeamRef,
};
pub use extractor::{extract_stat, parse_stat_value, MIN_NAME_SIMILARITY};
