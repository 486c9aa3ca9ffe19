//! parlay-settle: settlement and live tracking for multi-leg sports wagers
//!
//! This library provides:
//! - Team and player name normalization against a reference directory
//! - A typed box-score model and stat extraction
//! - Achieved-value calculation for player and team props
//! - Game resolution against an upstream scoreboard, with a TTL cache
//! - The leg and bet settlement state machine
//! - Periodic jobs that drive settlement unattended

pub mod bet;
pub mod boxscore;
pub mod cache;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod reference;
pub mod resolver;
pub mod scheduler;
pub mod settlement;
pub mod store;
pub mod telemetry;
pub mod upstream;
