//! Leaderboard selection settings.

use sea_orm::DatabaseConnection;

use crate::{
    data::leaderboard_settings::LeaderboardSettingsRepository,
    error::AppError,
    model::{
        leaderboard::LeaderboardSelection,
        settings::{LeaderboardSettings, UpdateLeaderboardSettingsParam},
    },
};

pub struct LeaderboardSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the current selection, falling back to the configured defaults.
    ///
    /// # Arguments
    /// - `default_selection` - Selection used until a moderator picks one
    /// - `default_image_url` - Image used when none is stored
    ///
    /// # Returns
    /// - `Ok(LeaderboardSettings)` - Stored or default settings
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_current(
        &self,
        default_selection: &LeaderboardSelection,
        default_image_url: Option<&str>,
    ) -> Result<LeaderboardSettings, AppError> {
        let stored = LeaderboardSettingsRepository::new(self.db).get().await?;

        Ok(match stored {
            Some(mut settings) => {
                if settings.image_url.is_none() {
                    settings.image_url = default_image_url.map(str::to_string);
                }
                settings
            }
            None => LeaderboardSettings {
                selection: default_selection.clone(),
                image_url: default_image_url.map(str::to_string),
                updated_at: None,
            },
        })
    }

    /// Changes the (track, car) selection, keeping any stored image.
    ///
    /// # Returns
    /// - `Ok(LeaderboardSettings)` - The stored settings
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn change_selection(
        &self,
        selection: LeaderboardSelection,
    ) -> Result<LeaderboardSettings, AppError> {
        let repo = LeaderboardSettingsRepository::new(self.db);
        let image_url = repo.get().await?.and_then(|settings| settings.image_url);

        let settings = repo
            .upsert(UpdateLeaderboardSettingsParam {
                selection,
                image_url,
            })
            .await?;

        tracing::info!(
            "Leaderboard selection changed to {}/{}",
            settings.selection.track,
            settings.selection.car
        );

        Ok(settings)
    }
}
