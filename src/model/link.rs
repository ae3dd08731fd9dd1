//! Steam-to-Discord link models.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_stored_id};

/// A Steam64 ID linked to a Discord account.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverLink {
    /// Steam64 ID of the driver.
    pub steam_id: String,
    /// Discord user ID the driver linked from.
    pub discord_id: u64,
    /// When the link was made.
    pub created_at: DateTime<Utc>,
}

impl DriverLink {
    /// Converts an entity model to a link domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(DriverLink)` - The converted link
    /// - `Err(AppError::InternalErr(CorruptStoredId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::driver_link::Model) -> Result<Self, AppError> {
        Ok(Self {
            steam_id: entity.steam_id,
            discord_id: parse_stored_id("discord_id", entity.discord_id)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a link.
#[derive(Debug, Clone)]
pub struct CreateDriverLinkParam {
    pub steam_id: String,
    pub discord_id: u64,
}
