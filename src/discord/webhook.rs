//! Webhook messenger for the leaderboard post.

use serenity::{
    all::{EditWebhookMessage, ExecuteWebhook, MessageId, Webhook},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    discord::{embed::build_leaderboard_embed, is_unknown, Messenger, UNKNOWN_MESSAGE_CODE},
    error::{messenger::MessengerError, AppError},
    model::leaderboard::LeaderboardView,
};

/// Messenger posting through the configured Discord webhook.
pub struct WebhookMessenger {
    http: Arc<Http>,
    webhook: Webhook,
}

impl WebhookMessenger {
    /// Resolves the webhook behind `url`.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client
    /// - `url` - Full webhook URL including its token
    ///
    /// # Returns
    /// - `Ok(WebhookMessenger)` - Webhook resolved
    /// - `Err(AppError::DiscordErr)` - URL invalid or webhook deleted
    pub async fn connect(http: Arc<Http>, url: &str) -> Result<Self, AppError> {
        let webhook = Webhook::from_url(&http, url).await?;

        Ok(Self { http, webhook })
    }
}

#[async_trait]
impl Messenger for WebhookMessenger {
    async fn send(&self, view: &LeaderboardView) -> Result<u64, MessengerError> {
        let builder = ExecuteWebhook::new().embeds(vec![build_leaderboard_embed(view)]);

        let message = self
            .webhook
            .execute(&self.http, true, builder)
            .await
            .map_err(Box::new)?
            .ok_or(MessengerError::MissingMessage)?;

        Ok(message.id.get())
    }

    async fn edit(&self, message_id: u64, view: &LeaderboardView) -> Result<(), MessengerError> {
        let builder = EditWebhookMessage::new().embeds(vec![build_leaderboard_embed(view)]);

        match self
            .webhook
            .edit_message(&self.http, MessageId::new(message_id), builder)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if is_unknown(&e, UNKNOWN_MESSAGE_CODE) => {
                Err(MessengerError::NotFound(message_id))
            }
            Err(e) => Err(MessengerError::Discord(Box::new(e))),
        }
    }
}
