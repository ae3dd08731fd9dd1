//! Leaderboard settings factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for the single leaderboard settings row.
pub struct LeaderboardSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    track: String,
    car: String,
    image_url: Option<String>,
}

impl<'a> LeaderboardSettingsFactory<'a> {
    /// Creates a new factory selecting `ks_nurburgring_layout_gp_a` / `tatuusfa1`
    /// with no image.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            track: "ks_nurburgring_layout_gp_a".to_string(),
            car: "tatuusfa1".to_string(),
            image_url: None,
        }
    }

    /// Sets the selected track.
    pub fn track(mut self, track: impl Into<String>) -> Self {
        self.track = track.into();
        self
    }

    /// Sets the selected car.
    pub fn car(mut self, car: impl Into<String>) -> Self {
        self.car = car.into();
        self
    }

    /// Sets the display image URL.
    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Builds and inserts the settings row into the database.
    pub async fn build(self) -> Result<entity::leaderboard_settings::Model, DbErr> {
        entity::leaderboard_settings::ActiveModel {
            id: ActiveValue::NotSet,
            track: ActiveValue::Set(self.track),
            car: ActiveValue::Set(self.car),
            image_url: ActiveValue::Set(self.image_url),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
