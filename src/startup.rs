use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    config::{Config, LicenceConfig},
    discord::{role::GuildRoleManager, webhook::WebhookMessenger},
    error::AppError,
    state::AppState,
    transfer::ftp::FtpFileStore,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// database schema is up-to-date.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared state with the production collaborators.
///
/// Resolves the leaderboard webhook, which needs one request to Discord.
///
/// # Arguments
/// - `config` - Application configuration
/// - `licence` - Validated tier table and weights
/// - `db` - Migrated database connection
///
/// # Returns
/// - `Ok(AppState)` - State ready for the bot and scheduler
/// - `Err(AppError::DiscordErr)` - Webhook could not be resolved
pub async fn build_state(
    config: Config,
    licence: LicenceConfig,
    db: DatabaseConnection,
) -> Result<AppState, AppError> {
    let http = Arc::new(Http::new(&config.discord_bot_token));

    let messenger = WebhookMessenger::connect(http.clone(), &config.discord_webhook).await?;
    let roles = GuildRoleManager::new(http.clone(), config.guild_id);
    let store = FtpFileStore::new(config.ftp.clone());

    Ok(AppState::new(
        db,
        config,
        licence,
        http,
        Arc::new(store),
        Arc::new(messenger),
        Arc::new(roles),
    ))
}
