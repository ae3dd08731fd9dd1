//! Leaderboard selection settings.

use chrono::{DateTime, Utc};

use crate::model::leaderboard::LeaderboardSelection;

/// Currently published (track, car) and optional embed image.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardSettings {
    pub selection: LeaderboardSelection,
    pub image_url: Option<String>,
    /// `None` when the settings come from configured defaults rather than the database.
    pub updated_at: Option<DateTime<Utc>>,
}

impl LeaderboardSettings {
    /// Converts an entity model to the settings domain model at the repository boundary.
    pub fn from_entity(entity: entity::leaderboard_settings::Model) -> Self {
        Self {
            selection: LeaderboardSelection::new(entity.track, entity.car),
            image_url: entity.image_url,
            updated_at: Some(entity.updated_at),
        }
    }
}

/// Parameters for replacing the leaderboard selection.
#[derive(Debug, Clone)]
pub struct UpdateLeaderboardSettingsParam {
    pub selection: LeaderboardSelection,
    pub image_url: Option<String>,
}
