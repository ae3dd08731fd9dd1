//! Discord gateway bot.
//!
//! Handles the chat side of the licence system: the claim message and its button in the
//! licence channel, the Steam linking conversation in DMs, and the moderator commands in
//! the mod-tools channel. The bot runs in its own tokio task next to the scheduler.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel availability
//! - `GUILD_MESSAGES` - Moderator commands in the mod-tools channel
//! - `DIRECT_MESSAGES` - Steam IDs sent to the bot in DMs
//! - `MESSAGE_CONTENT` - Reading the text of those messages (privileged intent)
//! - `GUILD_MEMBERS` - Member lookups for role assignment (privileged intent)
//!
//! Note: the privileged intents must be enabled in the Discord Developer Portal.

pub mod command;
pub mod handler;
pub mod start;
