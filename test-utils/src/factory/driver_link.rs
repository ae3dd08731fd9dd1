//! Driver link factory for creating test link entities.

use crate::factory::helpers::{next_id, steam_id_from};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating Steam-to-Discord links with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::driver_link::DriverLinkFactory;
///
/// let link = DriverLinkFactory::new(&db)
///     .steam_id("76561198000000000")
///     .discord_id("123456789")
///     .build()
///     .await?;
/// ```
pub struct DriverLinkFactory<'a> {
    db: &'a DatabaseConnection,
    steam_id: String,
    discord_id: String,
}

impl<'a> DriverLinkFactory<'a> {
    /// Creates a new DriverLinkFactory with default values.
    ///
    /// Defaults:
    /// - steam_id: `7656119` followed by the zero-padded counter
    /// - discord_id: the counter value
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            steam_id: steam_id_from(id),
            discord_id: id.to_string(),
        }
    }

    /// Sets the Steam64 ID for the link.
    pub fn steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.steam_id = steam_id.into();
        self
    }

    /// Sets the Discord user ID for the link.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Builds and inserts the link entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::driver_link::Model)` - Created link entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver_link::Model, DbErr> {
        entity::driver_link::ActiveModel {
            id: ActiveValue::NotSet,
            steam_id: ActiveValue::Set(self.steam_id),
            discord_id: ActiveValue::Set(self.discord_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a link with default values.
///
/// Shorthand for `DriverLinkFactory::new(db).build().await`.
pub async fn create_driver_link(
    db: &DatabaseConnection,
) -> Result<entity::driver_link::Model, DbErr> {
    DriverLinkFactory::new(db).build().await
}
