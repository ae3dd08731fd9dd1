//! Leaderboard publisher.
//!
//! Keeps at most one visible leaderboard message. The ID of the message posted last is
//! kept in the remote store; each publish edits that message in place, and only posts a
//! new one when no ID is known or Discord reports the old message as gone.
//!
//! | state              | edit result       | action               | outcome      |
//! |--------------------|-------------------|----------------------|--------------|
//! | `NoMessageKnown`   | n/a               | send, store new ID   | `Created`    |
//! | `MessageKnown(id)` | ok                | none                 | `Edited`     |
//! | `MessageKnown(id)` | not found         | send, store new ID   | `Replaced`   |
//! | `MessageKnown(id)` | any other failure | none, error returned | n/a          |

use crate::{
    config::RemoteFiles,
    discord::Messenger,
    error::{messenger::MessengerError, transfer::TransferError, AppError},
    model::leaderboard::{LeaderboardSelection, LeaderboardView, PublisherConfig},
    service::{leaderboard::render_leaderboard, snapshot::SnapshotService},
    transfer::RemoteFileStore,
};

/// What the publisher knows about the currently displayed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublisherState {
    NoMessageKnown,
    MessageKnown(u64),
}

/// Result of a successful publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No message was known; a new one was posted.
    Created { message_id: u64 },
    /// The known message was edited in place.
    Edited { message_id: u64 },
    /// The known message was gone; a new one replaced it.
    Replaced { previous: u64, current: u64 },
}

impl PublishOutcome {
    /// ID of the message now showing the leaderboard.
    pub fn message_id(&self) -> u64 {
        match self {
            Self::Created { message_id } | Self::Edited { message_id } => *message_id,
            Self::Replaced { current, .. } => *current,
        }
    }
}

/// Publishes the leaderboard for one (track, car) selection.
///
/// Callers serialize publishes: two concurrent runs could otherwise both find the old
/// message missing and each post a replacement.
pub struct LeaderboardPublisher<'a> {
    store: &'a dyn RemoteFileStore,
    messenger: &'a dyn Messenger,
    files: &'a RemoteFiles,
    config: &'a PublisherConfig,
}

impl<'a> LeaderboardPublisher<'a> {
    pub fn new(
        store: &'a dyn RemoteFileStore,
        messenger: &'a dyn Messenger,
        files: &'a RemoteFiles,
        config: &'a PublisherConfig,
    ) -> Self {
        Self {
            store,
            messenger,
            files,
            config,
        }
    }

    /// Reads the stored message handle.
    ///
    /// A missing, unreadable or unparsable handle all mean no message is known.
    pub async fn load_state(&self) -> PublisherState {
        let bytes = match self.store.fetch(&self.files.message_id).await {
            Ok(bytes) => bytes,
            Err(TransferError::NotFound(_)) => {
                tracing::debug!("No leaderboard message ID stored yet");
                return PublisherState::NoMessageKnown;
            }
            Err(e) => {
                tracing::warn!("Failed to read leaderboard message ID: {}", e);
                return PublisherState::NoMessageKnown;
            }
        };

        match String::from_utf8_lossy(&bytes).trim().parse::<u64>() {
            Ok(id) => PublisherState::MessageKnown(id),
            Err(_) => {
                tracing::warn!(
                    "Ignoring unparsable leaderboard message ID in '{}'",
                    self.files.message_id
                );
                PublisherState::NoMessageKnown
            }
        }
    }

    /// Fetches the leaderboard snapshot and shows it in the single leaderboard message.
    ///
    /// # Arguments
    /// - `selection` - Configured (track, car)
    /// - `image_url` - Optional image for the embed
    ///
    /// # Returns
    /// - `Ok(PublishOutcome)` - Leaderboard visible; the handle names the shown message
    /// - `Err(AppError::TransferErr | SnapshotErr)` - Snapshot unavailable; nothing was
    ///   sent and the handle is unchanged
    /// - `Err(AppError::MessengerErr)` - Edit failed for a reason other than a missing
    ///   message, or the send failed; the handle is unchanged
    /// - `Err(AppError::TransferErr)` - A new message was posted but its ID could not
    ///   be stored
    pub async fn publish(
        &self,
        selection: &LeaderboardSelection,
        image_url: Option<&str>,
    ) -> Result<PublishOutcome, AppError> {
        let data = SnapshotService::new(self.store, self.files)
            .fetch_leaderboard()
            .await?;

        let view = render_leaderboard(&data, selection, image_url, self.config);

        let outcome = match self.load_state().await {
            PublisherState::NoMessageKnown => {
                let message_id = self.send_and_store(&view).await?;
                PublishOutcome::Created { message_id }
            }
            PublisherState::MessageKnown(previous) => {
                match self.messenger.edit(previous, &view).await {
                    Ok(()) => PublishOutcome::Edited {
                        message_id: previous,
                    },
                    Err(MessengerError::NotFound(_)) => {
                        tracing::info!(
                            "Leaderboard message {} no longer exists, posting a new one",
                            previous
                        );
                        let current = self.send_and_store(&view).await?;
                        PublishOutcome::Replaced { previous, current }
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        tracing::info!(
            "Published leaderboard for {}/{} ({} rows): {:?}",
            view.selection.track,
            view.selection.car,
            view.rows.len(),
            outcome
        );

        Ok(outcome)
    }

    async fn send_and_store(&self, view: &LeaderboardView) -> Result<u64, AppError> {
        let message_id = self.messenger.send(view).await?;

        self.store
            .store(&self.files.message_id, message_id.to_string().as_bytes())
            .await?;

        Ok(message_id)
    }
}
