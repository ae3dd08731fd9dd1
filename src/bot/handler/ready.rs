//! Ready event handler for bot initialization.
//!
//! Fired once the bot has connected to Discord's gateway. Besides logging the connection
//! it makes sure the licence channel carries the claim message with its "Link Steam"
//! button, posting it when none of the recent messages is one.

use serenity::all::{
    ButtonStyle, ChannelId, Context, CreateActionRow, CreateButton, CreateMessage, GetMessages,
    Message, Ready, UserId,
};

use crate::{error::AppError, state::AppState};

/// Custom ID of the claim message button.
pub const LINK_STEAM_BUTTON: &str = "link_steam";

const CLAIM_MESSAGE: &str = "Link your Steam account:";
const CLAIM_MESSAGE_SCAN_LIMIT: u8 = 50;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Err(e) = ensure_claim_message(state, &ctx, ready.user.id).await {
        tracing::error!("Failed to ensure licence claim message: {}", e);
    }
}

/// Posts the claim message to the licence channel unless the bot already posted one.
async fn ensure_claim_message(
    state: &AppState,
    ctx: &Context,
    bot_id: UserId,
) -> Result<(), AppError> {
    let channel_id = ChannelId::new(state.config.licence_channel_id);

    let recent = channel_id
        .messages(ctx, GetMessages::new().limit(CLAIM_MESSAGE_SCAN_LIMIT))
        .await?;

    if recent.iter().any(|message| is_claim_message(message, bot_id)) {
        tracing::debug!("Licence claim message already present in {}", channel_id);
        return Ok(());
    }

    let button = CreateButton::new(LINK_STEAM_BUTTON)
        .label("Link Steam")
        .style(ButtonStyle::Primary);

    channel_id
        .send_message(
            ctx,
            CreateMessage::new()
                .content(CLAIM_MESSAGE)
                .components(vec![CreateActionRow::Buttons(vec![button])]),
        )
        .await?;

    tracing::info!("Posted licence claim message to {}", channel_id);

    Ok(())
}

fn is_claim_message(message: &Message, bot_id: UserId) -> bool {
    message.author.id == bot_id && claims_steam_link(&message.content)
}

fn claims_steam_link(content: &str) -> bool {
    content.to_lowercase().contains("link your steam")
}
