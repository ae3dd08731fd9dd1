//! Licence and leaderboard bot for an Assetto Corsa racing community.
//!
//! Drivers link their Steam64 ID to their Discord account in a DM. The bot then scores
//! each linked driver from the KissMyRank stats snapshot on the game server's FTP store,
//! assigns the matching licence role, and keeps one leaderboard embed up to date for the
//! selected track and car.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Scoring, licence assignment, linking and publishing
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment and licence file configuration
//! - **State** (`state`) - Shared application state and the locks serializing writes
//! - **Startup** (`startup`) - Database connection, migrations and collaborator wiring
//! - **Transfer** (`transfer/`) - Remote file store over FTP
//! - **Discord** (`discord/`) - Webhook messenger, role manager and moderator log
//! - **Scheduler** (`scheduler/`) - Cron job for the automatic run
//! - **Bot** (`bot/`) - Discord gateway event handlers

pub mod bot;
pub mod config;
pub mod data;
pub mod discord;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod transfer;
pub mod util;
