//! Domain models and operation-specific parameter types.
//!
//! Snapshot models (`driver`, `leaderboard`) are decoded from the files the game server
//! uploads; `link` and `settings` are converted from SeaORM entities at the repository
//! boundary; `licence` holds the validated tier table and scoring weights.

pub mod driver;
pub mod leaderboard;
pub mod lenient;
pub mod licence;
pub mod link;
pub mod settings;
