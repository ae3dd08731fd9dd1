//! Steam account linking.

use regex::Regex;
use sea_orm::DatabaseConnection;
use std::sync::LazyLock;

use crate::{
    data::driver_link::DriverLinkRepository,
    error::AppError,
    model::link::{CreateDriverLinkParam, DriverLink},
};

/// Steam64 IDs all start with `7656119`.
pub static STEAM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"7656119\d{10,12}").unwrap());

/// Finds the first Steam64 ID in free text, such as a pasted profile URL.
pub fn extract_steam_id(text: &str) -> Option<&str> {
    STEAM_ID.find(text).map(|m| m.as_str())
}

/// Result of a link request.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    /// The Steam ID was free and is now linked to the requester.
    Linked(DriverLink),
    /// The Steam ID was already linked to the requester.
    AlreadyLinkedToYou,
    /// The Steam ID belongs to someone else.
    LinkedToAnother,
}

pub struct LinkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LinkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a Steam ID to a Discord account unless it is already linked.
    ///
    /// Existing links are never overwritten; changing one needs a moderator.
    ///
    /// # Arguments
    /// - `steam_id` - Steam64 ID to link
    /// - `discord_id` - Discord account requesting the link
    ///
    /// # Returns
    /// - `Ok(LinkOutcome)` - New link or the reason none was made
    /// - `Err(AppError)` - Database error
    pub async fn link(&self, steam_id: &str, discord_id: u64) -> Result<LinkOutcome, AppError> {
        let repo = DriverLinkRepository::new(self.db);

        if let Some(existing) = repo.find_by_steam_id(steam_id).await? {
            return Ok(Self::existing_outcome(&existing, discord_id));
        }

        match repo
            .create(CreateDriverLinkParam {
                steam_id: steam_id.to_string(),
                discord_id,
            })
            .await
        {
            Ok(link) => {
                tracing::info!("Linked Steam ID {} to Discord user {}", steam_id, discord_id);
                Ok(LinkOutcome::Linked(link))
            }
            // Lost a race against another link of the same Steam ID
            Err(e) => match repo.find_by_steam_id(steam_id).await? {
                Some(existing) => Ok(Self::existing_outcome(&existing, discord_id)),
                None => Err(e),
            },
        }
    }

    fn existing_outcome(existing: &DriverLink, discord_id: u64) -> LinkOutcome {
        if existing.discord_id == discord_id {
            LinkOutcome::AlreadyLinkedToYou
        } else {
            LinkOutcome::LinkedToAnother
        }
    }
}
