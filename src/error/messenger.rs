use thiserror::Error;

/// Errors returned by the leaderboard messenger.
#[derive(Error, Debug)]
pub enum MessengerError {
    /// The referenced message no longer exists.
    ///
    /// This is the only edit failure that allows the publisher to fall back to
    /// posting a new message.
    #[error("Message {0} no longer exists")]
    NotFound(u64),

    /// Any other Discord failure.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// The webhook accepted the message but did not return it.
    #[error("Webhook did not return the created message")]
    MissingMessage,
}
