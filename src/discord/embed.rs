use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp};

use crate::model::leaderboard::LeaderboardView;

const LEADERBOARD_AUTHOR: &str = "🏆 KMR Leaderboard";
const LEADERBOARD_AUTHOR_URL: &str = "https://acstuff.ru/";
const LEADERBOARD_TITLE: &str = "AC Elite Server";
const LEADERBOARD_FOOTER: &str = "Data by AC Elite Assistant";
const LEADERBOARD_COLOR: u32 = 0x6495ed;

/// Builds the leaderboard embed from a rendered view.
///
/// # Arguments
/// - `view` - Rendered leaderboard; its image, when set, is used for the author icon,
///   thumbnail and footer icon
///
/// # Returns
/// - `CreateEmbed` - Embed ready to post through the webhook
pub fn build_leaderboard_embed(view: &LeaderboardView) -> CreateEmbed {
    let mut author = CreateEmbedAuthor::new(LEADERBOARD_AUTHOR).url(LEADERBOARD_AUTHOR_URL);
    let mut footer = CreateEmbedFooter::new(LEADERBOARD_FOOTER);

    let mut embed = CreateEmbed::new()
        .title(LEADERBOARD_TITLE)
        .description(view.description.clone())
        .color(LEADERBOARD_COLOR)
        .timestamp(Timestamp::now());

    if let Some(image_url) = &view.image_url {
        author = author.icon_url(image_url.clone());
        footer = footer.icon_url(image_url.clone());
        embed = embed.thumbnail(image_url.clone());
    }

    embed.author(author).footer(footer)
}
