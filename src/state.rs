//! Application state shared by the bot handlers and the scheduler.
//!
//! The state is built once at startup and cloned into every event handler and job; all
//! fields are cheap to clone (`Arc`s and the connection pool).
//!
//! Gateway events are dispatched concurrently, so the operations that write shared
//! resources take a lock first:
//! - `publish_lock` - the leaderboard message and its stored ID
//! - `link_lock` - the check-then-insert of a new driver link
//! - `assignment_lock` - licence role writes of a run

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    config::{Config, LicenceConfig},
    discord::{mod_log::ModLog, Messenger, RoleManager},
    error::AppError,
    model::{link::DriverLink, settings::LeaderboardSettings},
    service::{
        licence::{AssignmentRun, LicenceService},
        link::{LinkOutcome, LinkService},
        publisher::{LeaderboardPublisher, PublishOutcome},
        settings::LeaderboardSettingsService,
    },
    transfer::RemoteFileStore,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub licence: Arc<LicenceConfig>,
    pub http: Arc<Http>,
    pub store: Arc<dyn RemoteFileStore>,
    pub messenger: Arc<dyn Messenger>,
    pub roles: Arc<dyn RoleManager>,
    pub mod_log: ModLog,
    publish_lock: Arc<Mutex<()>>,
    link_lock: Arc<Mutex<()>>,
    assignment_lock: Arc<Mutex<()>>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        licence: LicenceConfig,
        http: Arc<Http>,
        store: Arc<dyn RemoteFileStore>,
        messenger: Arc<dyn Messenger>,
        roles: Arc<dyn RoleManager>,
    ) -> Self {
        let mod_log = ModLog::new(http.clone(), config.mod_log_channel_id);

        Self {
            db,
            config: Arc::new(config),
            licence: Arc::new(licence),
            http,
            store,
            messenger,
            roles,
            mod_log,
            publish_lock: Arc::new(Mutex::new(())),
            link_lock: Arc::new(Mutex::new(())),
            assignment_lock: Arc::new(Mutex::new(())),
        }
    }

    fn licence_service(&self) -> LicenceService<'_> {
        LicenceService::new(
            &self.db,
            self.store.as_ref(),
            self.roles.as_ref(),
            &self.licence,
            &self.config.remote_files,
            self.config.ranks_disabled,
        )
    }

    /// Runs a licence assignment over every linked driver.
    pub async fn assign_all_licences(&self) -> Result<AssignmentRun, AppError> {
        let _guard = self.assignment_lock.lock().await;

        self.licence_service().assign_all().await
    }

    /// Assigns the licence of one freshly linked driver.
    pub async fn assign_driver_licence(&self, link: DriverLink) -> Result<AssignmentRun, AppError> {
        let _guard = self.assignment_lock.lock().await;

        self.licence_service().assign_driver(link).await
    }

    /// Links a Steam ID to a Discord account.
    pub async fn link_driver(&self, steam_id: &str, discord_id: u64) -> Result<LinkOutcome, AppError> {
        let _guard = self.link_lock.lock().await;

        LinkService::new(&self.db).link(steam_id, discord_id).await
    }

    /// Publishes the leaderboard for the current selection.
    ///
    /// # Returns
    /// - `Ok((settings, outcome))` - The selection that was published and how
    /// - `Err(AppError)` - See [`LeaderboardPublisher::publish`]
    pub async fn publish_leaderboard(
        &self,
    ) -> Result<(LeaderboardSettings, PublishOutcome), AppError> {
        let _guard = self.publish_lock.lock().await;

        let settings = LeaderboardSettingsService::new(&self.db)
            .get_current(
                &self.config.default_selection,
                self.config.leaderboard_image_url.as_deref(),
            )
            .await?;

        let outcome = LeaderboardPublisher::new(
            self.store.as_ref(),
            self.messenger.as_ref(),
            &self.config.remote_files,
            &self.config.publisher,
        )
        .publish(&settings.selection, settings.image_url.as_deref())
        .await?;

        Ok((settings, outcome))
    }
}
