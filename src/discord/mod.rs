//! Discord collaborators used by the services.
//!
//! Services talk to Discord through the [`Messenger`] and [`RoleManager`] traits so the
//! publishing and licence logic can be tested without a gateway connection. The serenity
//! implementations live in [`webhook`] and [`role`].

pub mod embed;
pub mod mod_log;
pub mod role;
pub mod webhook;

#[cfg(test)]
pub mod fake;

use serenity::{async_trait, http::HttpError};

use crate::{
    error::{messenger::MessengerError, AppError},
    model::leaderboard::LeaderboardView,
};

/// Discord JSON error code for "Unknown Message".
pub const UNKNOWN_MESSAGE_CODE: isize = 10008;
/// Discord JSON error code for "Unknown Member".
pub const UNKNOWN_MEMBER_CODE: isize = 10007;

/// Posts and edits the leaderboard message.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Posts a new leaderboard message.
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the created message
    /// - `Err(MessengerError)` - The message could not be posted
    async fn send(&self, view: &LeaderboardView) -> Result<u64, MessengerError>;

    /// Replaces the content of an existing leaderboard message.
    ///
    /// # Returns
    /// - `Ok(())` - Message edited in place
    /// - `Err(MessengerError::NotFound)` - The message no longer exists
    /// - `Err(MessengerError)` - Any other failure
    async fn edit(&self, message_id: u64, view: &LeaderboardView) -> Result<(), MessengerError>;
}

/// Reads and mutates licence roles of guild members.
#[async_trait]
pub trait RoleManager: Send + Sync {
    /// Whether the user is currently a member of the guild.
    async fn member_exists(&self, user_id: u64) -> Result<bool, AppError>;

    /// Grants a role to a member.
    async fn add_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Removes a role from a member. Removing a role the member lacks succeeds.
    async fn remove_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;
}

/// Whether a serenity error is a Discord "unknown resource" reply.
///
/// Matches either the given JSON error code or a bare HTTP 404.
pub fn is_unknown(error: &serenity::Error, code: isize) -> bool {
    match error {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.error.code == code || response.status_code.as_u16() == 404
        }
        _ => false,
    }
}
