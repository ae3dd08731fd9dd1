//! Leaderboard rendering.
//!
//! Turns the raw `track → car → entries` snapshot into the bounded top-N view that the
//! publisher posts. Everything here is pure.

use crate::model::leaderboard::{
    LeaderboardData, LeaderboardEntry, LeaderboardRow, LeaderboardSelection, LeaderboardView,
    PublisherConfig,
};

const UNKNOWN_DRIVER: &str = "Unknown";

/// Formats a lap time in milliseconds as `m:ss.mmm`.
pub fn format_lap_time(millis: u64) -> String {
    let minutes = millis / 60_000;
    let seconds = (millis / 1_000) % 60;
    let millis = millis % 1_000;

    format!("{}:{:02}.{:03}", minutes, seconds, millis)
}

/// Cuts a name to at most `max_chars` characters, without an ellipsis.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

/// Finds the entries for a selection.
///
/// Some producers write the settings with track and car reversed, so when
/// `data[track][car]` is missing but `data[car][track]` exists the swapped pair is used.
///
/// # Returns
/// - The pair actually used, and its entries (empty when neither order exists)
pub fn select_bucket<'d>(
    data: &'d LeaderboardData,
    selection: &LeaderboardSelection,
) -> (LeaderboardSelection, &'d [LeaderboardEntry]) {
    if let Some(entries) = lookup(data, selection) {
        return (selection.clone(), entries);
    }

    let swapped = selection.swapped();
    if let Some(entries) = lookup(data, &swapped) {
        tracing::warn!(
            "Leaderboard has no entries for {}/{} but has {}/{}; track and car look swapped",
            selection.track,
            selection.car,
            swapped.track,
            swapped.car
        );
        return (swapped, entries);
    }

    (selection.clone(), &[])
}

fn lookup<'d>(
    data: &'d LeaderboardData,
    selection: &LeaderboardSelection,
) -> Option<&'d [LeaderboardEntry]> {
    data.get(&selection.track)
        .and_then(|cars| cars.get(&selection.car))
        .map(Vec::as_slice)
}

/// Renders the top-N view of a snapshot.
///
/// Entries are sorted by lap time, fastest first; ties keep their snapshot order.
///
/// # Arguments
/// - `data` - Full leaderboard snapshot
/// - `selection` - Configured (track, car)
/// - `image_url` - Optional image shown on the embed
/// - `config` - Number of places and name length limit
///
/// # Returns
/// - `LeaderboardView` - Rows and the formatted description
pub fn render_leaderboard(
    data: &LeaderboardData,
    selection: &LeaderboardSelection,
    image_url: Option<&str>,
    config: &PublisherConfig,
) -> LeaderboardView {
    let (selection, entries) = select_bucket(data, selection);

    let mut sorted: Vec<&LeaderboardEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.laptime);

    let rows: Vec<LeaderboardRow> = sorted
        .into_iter()
        .take(config.top_n)
        .enumerate()
        .map(|(i, entry)| LeaderboardRow {
            place: i + 1,
            name: truncate_name(
                entry.name.as_deref().unwrap_or(UNKNOWN_DRIVER),
                config.name_max_chars,
            ),
            lap_time: format_lap_time(entry.laptime),
        })
        .collect();

    let description = describe(&selection, config.top_n, &rows);

    LeaderboardView {
        selection,
        top_n: config.top_n,
        rows,
        description,
        image_url: image_url.map(str::to_string),
    }
}

fn describe(selection: &LeaderboardSelection, top_n: usize, rows: &[LeaderboardRow]) -> String {
    let mut description = format!(
        "**Track:** `{}`\n**Car:** `{}`\n\n**Top {}:**\n",
        selection.track, selection.car, top_n
    );

    for row in rows {
        description.push_str(&format!("{}. `{}` - **{}**", row.place, row.lap_time, row.name));
        if let Some(medal) = row.medal() {
            description.push(' ');
            description.push_str(medal);
        }
        description.push('\n');
    }

    description
}
