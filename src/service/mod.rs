//! Service layer.
//!
//! Services hold the bot's logic and coordinate the repositories with the remote store
//! and Discord collaborators. They borrow their dependencies and are cheap to construct
//! per call:
//! - `score` - Score engine
//! - `leaderboard` - Top-N rendering of the lap-time snapshot
//! - `snapshot` - Download and decoding of the snapshot files
//! - `publisher` - Single-message leaderboard publishing
//! - `licence` - Licence role assignment
//! - `link` - Steam account linking
//! - `settings` - Leaderboard (track, car) selection

pub mod leaderboard;
pub mod licence;
pub mod link;
pub mod publisher;
pub mod score;
pub mod settings;
pub mod snapshot;

#[cfg(test)]
mod test;
