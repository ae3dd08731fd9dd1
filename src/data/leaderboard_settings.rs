//! Leaderboard settings data repository.
//!
//! The table holds at most one row: the (track, car) selection moderators last chose with
//! `!changetrack`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::settings::{LeaderboardSettings, UpdateLeaderboardSettingsParam};

/// Repository providing database operations for the leaderboard selection.
pub struct LeaderboardSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardSettingsRepository<'a> {
    /// Creates a new LeaderboardSettingsRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored selection.
    ///
    /// # Returns
    /// - `Ok(Some(LeaderboardSettings))` - A selection has been stored
    /// - `Ok(None)` - No selection stored yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self) -> Result<Option<LeaderboardSettings>, DbErr> {
        let entity = entity::prelude::LeaderboardSettings::find()
            .order_by_asc(entity::leaderboard_settings::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(LeaderboardSettings::from_entity))
    }

    /// Creates or replaces the stored selection.
    ///
    /// Updates the existing row in place when one exists; otherwise inserts it.
    ///
    /// # Arguments
    /// - `param` - New track, car and image URL
    ///
    /// # Returns
    /// - `Ok(LeaderboardSettings)` - The stored selection
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: UpdateLeaderboardSettingsParam,
    ) -> Result<LeaderboardSettings, DbErr> {
        let existing = entity::prelude::LeaderboardSettings::find()
            .order_by_asc(entity::leaderboard_settings::Column::Id)
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = if let Some(existing) = existing {
            entity::leaderboard_settings::ActiveModel {
                id: ActiveValue::Unchanged(existing.id),
                track: ActiveValue::Set(param.selection.track),
                car: ActiveValue::Set(param.selection.car),
                image_url: ActiveValue::Set(param.image_url),
                updated_at: ActiveValue::Set(now),
            }
            .update(self.db)
            .await?
        } else {
            entity::leaderboard_settings::ActiveModel {
                id: ActiveValue::NotSet,
                track: ActiveValue::Set(param.selection.track),
                car: ActiveValue::Set(param.selection.car),
                image_url: ActiveValue::Set(param.image_url),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?
        };

        Ok(LeaderboardSettings::from_entity(entity))
    }
}
