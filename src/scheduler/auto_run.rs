use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::licence::AssignmentRun, state::AppState};

/// Starts the auto-run scheduler
///
/// Runs [`run_auto`] on the `AUTO_RUN_SCHEDULE` cron expression (hourly by default).
///
/// # Arguments
/// - `state`: Shared application state
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let schedule = state.config.auto_run_schedule.clone();
    let job_state = state.clone();

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = run_auto(&state).await {
                tracing::error!("Error during auto run: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Auto-run scheduler started with schedule '{}'", schedule);

    Ok(())
}

/// Assigns licences to every linked driver, then publishes the leaderboard.
///
/// A failed assignment is reported to the moderator log and does not stop the publish.
///
/// # Returns
/// - `Ok(())` - Leaderboard published
/// - `Err(AppError)` - Publishing failed; already reported to the moderator log
pub async fn run_auto(state: &AppState) -> Result<(), AppError> {
    let started_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    state
        .mod_log
        .post(format!("🚀 Auto run started at {}", started_at))
        .await;

    match state.assign_all_licences().await {
        Ok(AssignmentRun::Disabled) => {
            state.mod_log.post("⏸️ Auto-licence assignment skipped.").await;
        }
        Ok(AssignmentRun::Completed(report)) => {
            tracing::info!(
                "Auto assignment finished: {} assigned, {} skipped, {} role failures",
                report.assigned(),
                report.skipped(),
                report.role_failures()
            );
            state.mod_log.post_assignments(&report, "Auto-assigned").await;
            state
                .mod_log
                .post("✅ Auto-assignment of licences completed")
                .await;
        }
        Err(e) => {
            tracing::error!("Auto licence assignment failed: {}", e);
            state
                .mod_log
                .post(format!("❌ Auto-assignment of licences failed: {}", e))
                .await;
        }
    }

    match state.publish_leaderboard().await {
        Ok((settings, outcome)) => {
            tracing::info!("Auto leaderboard published: {:?}", outcome);
            state
                .mod_log
                .post(format!(
                    "✅ Auto leaderboard updated for {}/{}",
                    settings.selection.track, settings.selection.car
                ))
                .await;
            Ok(())
        }
        Err(e) => {
            state
                .mod_log
                .post(format!("❌ Auto leaderboard update failed: {}", e))
                .await;
            Err(e)
        }
    }
}
