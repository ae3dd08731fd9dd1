mod driver_link;
mod leaderboard_settings;
