//! Licence assignment.
//!
//! Classifies linked drivers by score and brings their Discord roles in line with the
//! tier table: every tier role is removed, then the computed one is added. The new role
//! is withheld while another tier role could not be removed, so a member never holds
//! two tiers at once. Drivers are
//! processed one after another; a driver without stats or without a guild membership is
//! skipped and the batch carries on.

use sea_orm::DatabaseConnection;

use crate::{
    config::{LicenceConfig, RemoteFiles},
    data::driver_link::DriverLinkRepository,
    discord::RoleManager,
    error::AppError,
    model::{driver::DriverStats, link::DriverLink},
    service::{
        score::{score_breakdown, ScoreBreakdown},
        snapshot::SnapshotService,
    },
    transfer::RemoteFileStore,
};

/// Result of a licence run.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentRun {
    /// Assignment is switched off with `DISABLE_RANKS`; nothing was fetched or changed.
    Disabled,
    Completed(AssignmentReport),
}

/// Per-driver results of a completed licence run, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentReport {
    pub assignments: Vec<DriverAssignment>,
}

impl AssignmentReport {
    pub fn assigned(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| matches!(a.outcome, AssignmentOutcome::Assigned { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.assignments.len() - self.assigned()
    }

    /// Number of role calls that failed across the whole run.
    pub fn role_failures(&self) -> usize {
        self.assignments
            .iter()
            .map(|a| match &a.outcome {
                AssignmentOutcome::Assigned { role_sync, .. } => role_sync.failures().len(),
                AssignmentOutcome::Skipped(_) => 0,
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverAssignment {
    pub steam_id: String,
    pub discord_id: u64,
    pub outcome: AssignmentOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    /// The driver was classified and their roles were updated.
    Assigned {
        tier: String,
        role_id: u64,
        score: f64,
        breakdown: ScoreBreakdown,
        role_sync: RoleSync,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No record for the Steam ID in the rank snapshot.
    NoStats,
    /// The Discord account is not a member of the guild.
    NotInGuild,
    /// The membership check itself failed.
    MemberLookupFailed,
}

/// Which role call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    RemoveTierRole(u64),
    AddTierRole(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleFailure {
    pub action: RoleAction,
    pub error: String,
}

/// Role calls that failed while updating one driver.
///
/// Role mutation failures are logged, not propagated: a failed call is recorded here
/// and the run moves on to the next call and the next driver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleSync {
    failures: Vec<RoleFailure>,
}

impl RoleSync {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[RoleFailure] {
        &self.failures
    }

    /// Logs a failed role call and records it instead of returning the error.
    fn log_role_failure(&mut self, steam_id: &str, action: RoleAction, error: AppError) {
        tracing::warn!(
            "Role change {:?} for driver {} failed: {}",
            action,
            steam_id,
            error
        );
        self.failures.push(RoleFailure {
            action,
            error: error.to_string(),
        });
    }

    /// Records that the tier role was not added because an old tier role is still held.
    fn withhold_add(&mut self, steam_id: &str, role_id: u64) {
        tracing::warn!(
            "Not adding tier role {} to driver {}: a previous tier role could not be removed",
            role_id,
            steam_id
        );
        self.failures.push(RoleFailure {
            action: RoleAction::AddTierRole(role_id),
            error: "not attempted, a previous tier role is still held".to_string(),
        });
    }
}

/// Service assigning licence roles to linked drivers.
pub struct LicenceService<'a> {
    db: &'a DatabaseConnection,
    store: &'a dyn RemoteFileStore,
    roles: &'a dyn RoleManager,
    licence: &'a LicenceConfig,
    files: &'a RemoteFiles,
    ranks_disabled: bool,
}

impl<'a> LicenceService<'a> {
    /// Creates a new LicenceService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection holding the driver links
    /// - `store` - Remote store holding the rank snapshot
    /// - `roles` - Role manager for the guild
    /// - `licence` - Tier table and score weights
    /// - `files` - Remote file names
    /// - `ranks_disabled` - When set, every run returns `AssignmentRun::Disabled`
    pub fn new(
        db: &'a DatabaseConnection,
        store: &'a dyn RemoteFileStore,
        roles: &'a dyn RoleManager,
        licence: &'a LicenceConfig,
        files: &'a RemoteFiles,
        ranks_disabled: bool,
    ) -> Self {
        Self {
            db,
            store,
            roles,
            licence,
            files,
            ranks_disabled,
        }
    }

    /// Assigns licences to every linked driver.
    ///
    /// The rank snapshot is fetched once up front; if that fails the run stops before any
    /// role is touched.
    ///
    /// # Returns
    /// - `Ok(AssignmentRun::Disabled)` - Assignment is switched off
    /// - `Ok(AssignmentRun::Completed(report))` - Every link was processed
    /// - `Err(AppError)` - Snapshot or link table unavailable
    pub async fn assign_all(&self) -> Result<AssignmentRun, AppError> {
        if self.ranks_disabled {
            tracing::info!("Licence assignment is disabled, skipping run");
            return Ok(AssignmentRun::Disabled);
        }

        let stats = SnapshotService::new(self.store, self.files)
            .fetch_driver_stats()
            .await?;
        let links = DriverLinkRepository::new(self.db).get_all().await?;

        let mut report = AssignmentReport::default();
        for link in links {
            let assignment = self.assign(&stats, link).await;
            report.assignments.push(assignment);
        }

        tracing::info!(
            "Licence run finished: {} assigned, {} skipped, {} role failures",
            report.assigned(),
            report.skipped(),
            report.role_failures()
        );

        Ok(AssignmentRun::Completed(report))
    }

    /// Assigns the licence of a single driver, used right after they link.
    ///
    /// # Arguments
    /// - `link` - The driver's Steam ID and Discord account
    ///
    /// # Returns
    /// - `Ok(AssignmentRun::Disabled)` - Assignment is switched off
    /// - `Ok(AssignmentRun::Completed(report))` - Report with exactly one entry
    /// - `Err(AppError)` - Snapshot unavailable
    pub async fn assign_driver(&self, link: DriverLink) -> Result<AssignmentRun, AppError> {
        if self.ranks_disabled {
            tracing::info!(
                "Licence assignment is disabled, not assigning driver {}",
                link.steam_id
            );
            return Ok(AssignmentRun::Disabled);
        }

        let stats = SnapshotService::new(self.store, self.files)
            .fetch_driver_stats()
            .await?;

        let assignment = self.assign(&stats, link).await;

        Ok(AssignmentRun::Completed(AssignmentReport {
            assignments: vec![assignment],
        }))
    }

    async fn assign(&self, stats: &[DriverStats], link: DriverLink) -> DriverAssignment {
        let outcome = self.assign_outcome(stats, &link).await;

        DriverAssignment {
            steam_id: link.steam_id,
            discord_id: link.discord_id,
            outcome,
        }
    }

    async fn assign_outcome(&self, stats: &[DriverStats], link: &DriverLink) -> AssignmentOutcome {
        let Some(driver) = stats.iter().find(|s| s.is_driver(&link.steam_id)) else {
            tracing::debug!("No stats for driver {}, skipping", link.steam_id);
            return AssignmentOutcome::Skipped(SkipReason::NoStats);
        };

        let breakdown = score_breakdown(driver, &self.licence.weights);
        let score = breakdown.total();
        let tier = self.licence.tiers.classify(score);

        match self.roles.member_exists(link.discord_id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(
                    "Discord user {} of driver {} is not in the guild, skipping",
                    link.discord_id,
                    link.steam_id
                );
                return AssignmentOutcome::Skipped(SkipReason::NotInGuild);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to look up Discord user {} of driver {}: {}",
                    link.discord_id,
                    link.steam_id,
                    e
                );
                return AssignmentOutcome::Skipped(SkipReason::MemberLookupFailed);
            }
        }

        let mut role_sync = RoleSync::default();

        let mut other_tier_kept = false;
        for role_id in self.licence.tiers.role_ids() {
            if let Err(e) = self.roles.remove_role(link.discord_id, role_id).await {
                role_sync.log_role_failure(&link.steam_id, RoleAction::RemoveTierRole(role_id), e);
                other_tier_kept |= role_id != tier.role_id;
            }
        }

        if other_tier_kept {
            role_sync.withhold_add(&link.steam_id, tier.role_id);
        } else if let Err(e) = self.roles.add_role(link.discord_id, tier.role_id).await {
            role_sync.log_role_failure(&link.steam_id, RoleAction::AddTierRole(tier.role_id), e);
        }

        tracing::info!(
            "Assigned {} to {} ({}) with score {:.2}",
            tier.name,
            driver.display_name(),
            link.steam_id,
            score
        );

        AssignmentOutcome::Assigned {
            tier: tier.name.clone(),
            role_id: tier.role_id,
            score,
            breakdown,
            role_sync,
        }
    }
}
