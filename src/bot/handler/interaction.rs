//! Component interaction handler.

use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage, Interaction,
};

use crate::bot::handler::ready::LINK_STEAM_BUTTON;

const LINKING_INSTRUCTIONS: &str = "**Welcome to the KMR Steam Account Linking!**

To claim your licence and participate on our servers, please link your Steam account to your Discord account.

**How to do this:**
1. Open your Steam profile in your web browser (for example: `https://steamcommunity.com/id/yourname`).
2. Copy your Steam **profile link** OR your **Steam64 ID** (a long number starting with 7656119...).
   - To find your Steam64 ID, paste your profile link into a site like https://steamid.io and copy the number listed as \"SteamID64\".
3. Send your Steam64 ID or profile link here in this chat.
   _(Example: `https://steamcommunity.com/profiles/76561198000000000` or `76561198000000000`)_
4. Once linked, you will be automatically assigned the correct licence role for your stats!

**⚠️ Please note:**
- Each Steam account can only be linked to one Discord account.
- If you have already linked a Steam ID and need to change it, contact a moderator.

If you need help, just ask here or tag a mod in the server.";

/// Handles interactions, answering the claim message button.
pub async fn handle_interaction(ctx: Context, interaction: Interaction) {
    let Interaction::Component(component) = interaction else {
        return;
    };

    if component.data.custom_id != LINK_STEAM_BUTTON {
        return;
    }

    handle_link_button(&ctx, &component).await;
}

async fn handle_link_button(ctx: &Context, component: &ComponentInteraction) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content("Check your DM!")
            .ephemeral(true),
    );

    if let Err(e) = component.create_response(ctx, response).await {
        tracing::warn!(
            "Failed to answer link button for user {}: {}",
            component.user.id,
            e
        );
    }

    if let Err(e) = component
        .user
        .direct_message(ctx, CreateMessage::new().content(LINKING_INSTRUCTIONS))
        .await
    {
        tracing::warn!(
            "Failed to DM linking instructions to user {}: {}",
            component.user.id,
            e
        );

        if let Err(e) = component.create_followup(ctx, dm_failed_followup()).await {
            tracing::warn!(
                "Failed to send DM failure notice to user {}: {}",
                component.user.id,
                e
            );
        }
    }
}

/// Ephemeral notice for users whose DMs are closed to the bot.
fn dm_failed_followup() -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .content("❌ I couldn't DM you. Please enable DMs from server members and press the button again.")
        .ephemeral(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Discord's EPHEMERAL message flag.
    const EPHEMERAL: u64 = 1 << 6;

    #[test]
    fn dm_failure_notice_is_ephemeral() {
        let body = serde_json::to_value(dm_failed_followup()).unwrap();

        assert!(body["content"]
            .as_str()
            .unwrap()
            .starts_with("❌ I couldn't DM you."));
        assert_eq!(body["flags"].as_u64().unwrap() & EPHEMERAL, EPHEMERAL);
    }
}
