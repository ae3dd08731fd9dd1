use crate::{
    data::leaderboard_settings::LeaderboardSettingsRepository,
    model::{leaderboard::LeaderboardSelection, settings::UpdateLeaderboardSettingsParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod upsert;
