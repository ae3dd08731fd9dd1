use licence_bot::{
    bot,
    config::{Config, LicenceConfig},
    error::AppError,
    scheduler::auto_run,
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let licence = LicenceConfig::load(&config.licence_config_path)?;

    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_state(config, licence, db).await?;

    // `licence-bot auto` runs once over HTTP only and exits
    if std::env::args().nth(1).as_deref() == Some("auto") {
        tracing::info!("Running one-shot auto run");
        return auto_run::run_auto(&state).await;
    }

    tracing::info!("Starting licence bot");

    let bot_client = bot::start::init_bot(state.clone()).await?;
    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    auto_run::start_scheduler(state).await?;

    tokio::select! {
        _ = bot_task => tracing::warn!("Discord bot stopped"),
        _ = tokio::signal::ctrl_c() => tracing::info!("Shutting down"),
    }

    Ok(())
}
