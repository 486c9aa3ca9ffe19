//! Automation Scheduler
//!
//! Independent periodic jobs that move legs and bets through the settlement
//! lifecycle without anyone watching: orphan repair, name standardization,
//! live refresh, finalization, hit status and archival. Every mutation is
//! idempotent or monotonic, so jobs may overlap each other and manual
//! refreshes.

mod engine;
mod jobs;
mod runner;

pub use engine::SettlementEngine;
pub use jobs::{JobKind, JobReport};
pub use runner::{Scheduler, SchedulerHandle};
