//! Name Normalizer and its reference directory
//!
//! Bet slips name teams by full name, nickname, abbreviation or the wrong
//! league entirely. Everything is resolved against a read-only directory to
//! one canonical short name per sport.

mod directory;
pub mod matching;
mod normalizer;
mod teams;

pub use directory::{PlayerEntry, ReferenceDirectory, ReferenceError, TeamEntry};
pub use normalizer::{is_placeholder, NameNormalizer};
