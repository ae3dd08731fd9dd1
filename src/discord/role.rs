//! Guild role manager over the Discord HTTP API.

use serenity::{
    all::{GuildId, RoleId, UserId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    discord::{is_unknown, RoleManager, UNKNOWN_MEMBER_CODE},
    error::AppError,
};

const AUDIT_LOG_REASON: &str = "Licence assignment";

/// Manages licence roles in the configured guild.
pub struct GuildRoleManager {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl GuildRoleManager {
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }
}

#[async_trait]
impl RoleManager for GuildRoleManager {
    async fn member_exists(&self, user_id: u64) -> Result<bool, AppError> {
        match self.http.get_member(self.guild_id, UserId::new(user_id)).await {
            Ok(_) => Ok(true),
            Err(e) if is_unknown(&e, UNKNOWN_MEMBER_CODE) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(
                self.guild_id,
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(AUDIT_LOG_REASON),
            )
            .await?;

        Ok(())
    }

    async fn remove_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                self.guild_id,
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(AUDIT_LOG_REASON),
            )
            .await?;

        Ok(())
    }
}
