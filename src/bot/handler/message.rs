//! Message handlers for the Steam linking DM flow and the moderator commands.
//!
//! DMs are treated as link requests. Messages in the mod-tools channel are parsed as
//! moderator commands; everything else is ignored. Replies to moderator commands are
//! removed together with the command after [`REPLY_LIFETIME`].

use serenity::all::{ChannelId, Context, CreateMessage, Message, MessageId};
use std::time::Duration;

use crate::{
    bot::command::ModCommand,
    model::leaderboard::LeaderboardSelection,
    service::{
        licence::AssignmentRun,
        link::{extract_steam_id, LinkOutcome},
        settings::LeaderboardSettingsService,
    },
    state::AppState,
};

/// How long moderator command replies stay in the channel.
pub const REPLY_LIFETIME: Duration = Duration::from_secs(8);

const MOD_HELP: &str = "**AC Elite Assistant Help**

Here are all the moderator commands you can use in the mod-tools channel:

`!changetrack [track] <car>`
Change the track and car for the leaderboard. Example: `!changetrack spa ferrari488`. If you only provide the car, the default track is kept.
- **Tip:** You can find the full track names on the KMR Panel under Tracks. Click on a track, then copy the track name from the end of the URL, e.g. `ks_nurburgring_layout_gp_a`.

`!assignlicences`
Manually assign licence roles to all currently linked Discord users based on the latest stats.

`!updateleaderboard`
Post or update the leaderboard embed based on the current settings.

`!achelp`
Get this list of commands sent to your DM!

*Notes:*
- Only users with a moderator role can use these commands.
- Use these commands only in the mod-tools channel.
- If you need help or something is broken, ask the bot owner.";

/// Handle message creation in a channel or DM
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    if message.guild_id.is_none() {
        handle_link_request(state, &ctx, &message).await;
        return;
    }

    if message.channel_id.get() == state.config.mod_channel_id {
        handle_mod_message(state, &ctx, &message).await;
    }
}

/// Links the Steam ID found in a DM and assigns the driver's licence right away.
async fn handle_link_request(state: &AppState, ctx: &Context, message: &Message) {
    let Some(steam_id) = extract_steam_id(&message.content) else {
        reply(ctx, message, "Invalid Steam64 ID.").await;
        return;
    };

    let discord_id = message.author.id.get();

    let link = match state.link_driver(steam_id, discord_id).await {
        Ok(LinkOutcome::Linked(link)) => link,
        Ok(LinkOutcome::AlreadyLinkedToYou) => {
            reply(
                ctx,
                message,
                "✅ This Steam64 ID is already linked to your Discord account!\n\nIf you want to update or change your linked Steam account, please contact a moderator.",
            )
            .await;
            return;
        }
        Ok(LinkOutcome::LinkedToAnother) => {
            reply(
                ctx,
                message,
                "❌ This Steam64 ID is already linked to another Discord user.\n\nIf you believe this is a mistake, or if someone else linked your Steam account, please contact a moderator for help.",
            )
            .await;
            return;
        }
        Err(e) => {
            tracing::error!(
                "Failed to link Steam ID {} to user {}: {}",
                steam_id,
                discord_id,
                e
            );
            reply(
                ctx,
                message,
                "❌ Something went wrong while linking your account. Please try again later.",
            )
            .await;
            return;
        }
    };

    reply(
        ctx,
        message,
        &format!("✅ Linked to your account! ({})", link.steam_id),
    )
    .await;

    let steam_id = link.steam_id.clone();
    match state.assign_driver_licence(link).await {
        Ok(AssignmentRun::Completed(report)) => {
            state.mod_log.post_assignments(&report, "Assigned").await;
        }
        Ok(AssignmentRun::Disabled) => {
            state
                .mod_log
                .post(format!(
                    "⏸️ Skipped assigning licence for <@{}> (Steam64 {}) because ranks are temporarily disabled.",
                    discord_id, steam_id
                ))
                .await;
        }
        Err(e) => {
            tracing::error!(
                "Failed to assign licence for newly linked driver {}: {}",
                steam_id,
                e
            );
        }
    }
}

async fn handle_mod_message(state: &AppState, ctx: &Context, message: &Message) {
    let Some(command) = ModCommand::parse(&message.content) else {
        return;
    };

    if !is_moderator(state, message) {
        reply_and_expire(ctx, message, "You don't have permission.").await;
        return;
    }

    match command {
        ModCommand::ChangeTrack { track, car } => {
            let track = track.unwrap_or_else(|| state.config.default_selection.track.clone());
            handle_change_track(state, ctx, message, LeaderboardSelection::new(track, car)).await;
        }
        ModCommand::ChangeTrackUsage => {
            reply_and_expire(ctx, message, "Usage: !changetrack [track] <car>").await;
        }
        ModCommand::AssignLicences => handle_assign_licences(state, ctx, message).await,
        ModCommand::UpdateLeaderboard => handle_update_leaderboard(state, ctx, message).await,
        ModCommand::Help => handle_help(ctx, message).await,
    }
}

fn is_moderator(state: &AppState, message: &Message) -> bool {
    message.member.as_ref().is_some_and(|member| {
        member
            .roles
            .iter()
            .any(|role| state.config.mod_role_ids.contains(&role.get()))
    })
}

async fn handle_change_track(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    selection: LeaderboardSelection,
) {
    match LeaderboardSettingsService::new(&state.db)
        .change_selection(selection)
        .await
    {
        Ok(settings) => {
            reply_and_expire(
                ctx,
                message,
                &format!(
                    "Settings updated: {}/{}",
                    settings.selection.track, settings.selection.car
                ),
            )
            .await;
        }
        Err(e) => {
            tracing::error!("Failed to change leaderboard selection: {}", e);
            reply_and_expire(ctx, message, &format!("Error: {}", e)).await;
        }
    }
}

async fn handle_assign_licences(state: &AppState, ctx: &Context, message: &Message) {
    if state.config.ranks_disabled {
        reply_and_expire(ctx, message, "⏸️ Ranks are temporarily disabled.").await;
        return;
    }

    state
        .mod_log
        .post(format!("🛠️ Manual assignLicences at {}", timestamp()))
        .await;

    match state.assign_all_licences().await {
        Ok(AssignmentRun::Completed(report)) => {
            state.mod_log.post_assignments(&report, "Assigned").await;
            state
                .mod_log
                .post(format!(
                    "✅ Manual assignLicences completed ({} assigned, {} skipped)",
                    report.assigned(),
                    report.skipped()
                ))
                .await;
            reply_and_expire(ctx, message, "All linked members licenced!").await;
        }
        Ok(AssignmentRun::Disabled) => {
            reply_and_expire(ctx, message, "⏸️ Ranks are temporarily disabled.").await;
        }
        Err(e) => {
            tracing::error!("Manual licence assignment failed: {}", e);
            state
                .mod_log
                .post(format!("❌ Manual assignLicences failed: {}", e))
                .await;
            reply_and_expire(ctx, message, &format!("Error: {}", e)).await;
        }
    }
}

async fn handle_update_leaderboard(state: &AppState, ctx: &Context, message: &Message) {
    state
        .mod_log
        .post(format!("🛠️ Manual leaderboard update at {}", timestamp()))
        .await;

    match state.publish_leaderboard().await {
        Ok((settings, _)) => {
            state
                .mod_log
                .post(format!(
                    "✅ Manual leaderboard updated for {}/{}",
                    settings.selection.track, settings.selection.car
                ))
                .await;
            reply_and_expire(ctx, message, "Leaderboard updated!").await;
        }
        Err(e) => {
            tracing::error!("Manual leaderboard update failed: {}", e);
            reply_and_expire(ctx, message, &format!("Error: {}", e)).await;
        }
    }
}

async fn handle_help(ctx: &Context, message: &Message) {
    match message
        .author
        .direct_message(ctx, CreateMessage::new().content(MOD_HELP))
        .await
    {
        Ok(_) => {
            reply_and_expire(
                ctx,
                message,
                "📬 I've sent you a DM with all available moderator commands!",
            )
            .await;
        }
        Err(e) => {
            tracing::warn!("Failed to DM help to user {}: {}", message.author.id, e);
            reply_and_expire(
                ctx,
                message,
                "❌ I couldn't DM you. Please check your DM privacy settings.",
            )
            .await;
        }
    }
}

async fn reply(ctx: &Context, message: &Message, content: &str) -> Option<MessageId> {
    match message.reply(ctx, content).await {
        Ok(sent) => Some(sent.id),
        Err(e) => {
            tracing::warn!(
                "Failed to reply to message {} in {}: {}",
                message.id,
                message.channel_id,
                e
            );
            None
        }
    }
}

/// Replies, then deletes both the reply and the command after [`REPLY_LIFETIME`].
async fn reply_and_expire(ctx: &Context, message: &Message, content: &str) {
    let reply_id = reply(ctx, message, content).await;

    let http = ctx.http.clone();
    let channel_id: ChannelId = message.channel_id;
    let command_id = message.id;

    tokio::spawn(async move {
        tokio::time::sleep(REPLY_LIFETIME).await;

        for message_id in reply_id.into_iter().chain(std::iter::once(command_id)) {
            if let Err(e) = channel_id.delete_message(&http, message_id).await {
                tracing::debug!(
                    "Failed to delete expired message {} in {}: {}",
                    message_id,
                    channel_id,
                    e
                );
            }
        }
    });
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
