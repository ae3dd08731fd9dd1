//! Error types for the licence bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors, so services, handlers and
//! the scheduler can propagate failures with `?` and log them once at the boundary.

pub mod config;
pub mod internal;
pub mod messenger;
pub mod snapshot;
pub mod transfer;

use thiserror::Error;

use crate::error::{
    config::ConfigError, internal::InternalError, messenger::MessengerError,
    snapshot::SnapshotError, transfer::TransferError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup, environment loading or licence file validation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Remote file store (FTP) failure.
    #[error(transparent)]
    TransferErr(#[from] TransferError),

    /// A downloaded stats or leaderboard snapshot could not be decoded.
    #[error(transparent)]
    SnapshotErr(#[from] SnapshotError),

    /// Leaderboard message could not be sent or edited.
    #[error(transparent)]
    MessengerErr(#[from] MessengerError),

    /// Internal inconsistency, such as a stored ID that no longer parses.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
