//! Driver link data repository.
//!
//! This module provides the `DriverLinkRepository` for the Steam-to-Discord link table.
//! Links are unique per Steam64 ID; the repository never overwrites an existing link.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::link::{CreateDriverLinkParam, DriverLink},
};

/// Repository providing database operations for driver links.
pub struct DriverLinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverLinkRepository<'a> {
    /// Creates a new DriverLinkRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DriverLinkRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the link for a Steam64 ID.
    ///
    /// # Arguments
    /// - `steam_id` - Steam64 ID to look up
    ///
    /// # Returns
    /// - `Ok(Some(DriverLink))` - The Steam ID is linked
    /// - `Ok(None)` - The Steam ID is not linked
    /// - `Err(AppError)` - Database error or corrupt stored Discord ID
    pub async fn find_by_steam_id(&self, steam_id: &str) -> Result<Option<DriverLink>, AppError> {
        let entity = entity::prelude::DriverLink::find()
            .filter(entity::driver_link::Column::SteamId.eq(steam_id))
            .one(self.db)
            .await?;

        entity.map(DriverLink::from_entity).transpose()
    }

    /// Gets all links in the order they were created.
    ///
    /// Batch licence assignment walks this list sequentially.
    ///
    /// # Returns
    /// - `Ok(Vec<DriverLink>)` - Every stored link
    /// - `Err(AppError)` - Database error or corrupt stored Discord ID
    pub async fn get_all(&self) -> Result<Vec<DriverLink>, AppError> {
        entity::prelude::DriverLink::find()
            .order_by_asc(entity::driver_link::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(DriverLink::from_entity)
            .collect()
    }

    /// Creates a new link.
    ///
    /// Fails with a database error if the Steam ID is already linked, because of the
    /// unique index on `steam_id`.
    ///
    /// # Arguments
    /// - `param` - Steam64 ID and Discord account to link
    ///
    /// # Returns
    /// - `Ok(DriverLink)` - The stored link
    /// - `Err(AppError::DbErr)` - Insert failed, including unique violations
    pub async fn create(&self, param: CreateDriverLinkParam) -> Result<DriverLink, AppError> {
        let entity = entity::driver_link::ActiveModel {
            id: ActiveValue::NotSet,
            steam_id: ActiveValue::Set(param.steam_id),
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        DriverLink::from_entity(entity)
    }
}
