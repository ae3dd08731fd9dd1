//! Environment and licence-file configuration.
//!
//! `Config::from_env` is called once at startup after `dotenvy` has loaded `.env`. The
//! licence tier table and scoring weights live in a separate JSON file so they can be
//! retuned without touching the environment.

use serde::Deserialize;
use std::path::Path;

use crate::{
    error::config::ConfigError,
    model::{
        leaderboard::{LeaderboardSelection, PublisherConfig},
        licence::{LicenceTier, ScoreWeights, TierTable},
    },
};

const DEFAULT_LICENCE_CONFIG_PATH: &str = "licences.json";
const DEFAULT_AUTO_RUN_SCHEDULE: &str = "0 0 * * * *";
const DEFAULT_TRACK: &str = "ks_nurburgring_layout_gp_a";
const DEFAULT_CAR: &str = "tatuusfa1";
const DEFAULT_LEADERBOARD_IMAGE: &str =
    "https://raw.githubusercontent.com/xstellaa10/ac-elite-leaderboard-bot/master/images/acelite.png";
const DEFAULT_RANK_FILE: &str = "kissmyrank/rank.json";
const DEFAULT_LEADERBOARD_FILE: &str = "kissmyrank/leaderboard.json";
const DEFAULT_MESSAGE_ID_FILE: &str = "discord_message_id.txt";

/// FTP credentials for the game server's file store.
#[derive(Debug, Clone)]
pub struct FtpConfig {
    /// Host, optionally with `:port`. Port 21 is used when omitted.
    pub host: String,
    pub user: String,
    pub password: String,
}

/// Names of the files read from and written to the remote store.
#[derive(Debug, Clone)]
pub struct RemoteFiles {
    pub rank: String,
    pub leaderboard: String,
    pub message_id: String,
}

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub discord_webhook: String,
    pub guild_id: u64,

    pub licence_channel_id: u64,
    pub mod_channel_id: u64,
    pub mod_log_channel_id: u64,
    pub mod_role_ids: Vec<u64>,

    pub ftp: FtpConfig,
    pub remote_files: RemoteFiles,

    /// Pauses automatic and manual licence assignment without a redeploy.
    pub ranks_disabled: bool,
    pub licence_config_path: String,
    pub auto_run_schedule: String,

    pub default_selection: LeaderboardSelection,
    pub leaderboard_image_url: Option<String>,
    pub publisher: PublisherConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_webhook: required("DISCORD_WEBHOOK")?,
            guild_id: required_id("GUILD_ID")?,
            licence_channel_id: required_id("LICENCE_CHANNEL_ID")?,
            mod_channel_id: required_id("MOD_CHANNEL_ID")?,
            mod_log_channel_id: required_id("MOD_LOG_CHANNEL_ID")?,
            mod_role_ids: parse_id_list("MOD_ROLE_IDS", &required("MOD_ROLE_IDS")?)?,
            ftp: FtpConfig {
                host: required("FTP_HOST")?,
                user: required("FTP_USER")?,
                password: required("FTP_PASS")?,
            },
            remote_files: RemoteFiles {
                rank: optional("FTP_RANK_FILE").unwrap_or_else(|| DEFAULT_RANK_FILE.to_string()),
                leaderboard: optional("FTP_LEADERBOARD_FILE")
                    .unwrap_or_else(|| DEFAULT_LEADERBOARD_FILE.to_string()),
                message_id: optional("FTP_MESSAGE_ID_FILE")
                    .unwrap_or_else(|| DEFAULT_MESSAGE_ID_FILE.to_string()),
            },
            ranks_disabled: optional("DISABLE_RANKS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            licence_config_path: optional("LICENCE_CONFIG_PATH")
                .unwrap_or_else(|| DEFAULT_LICENCE_CONFIG_PATH.to_string()),
            auto_run_schedule: optional("AUTO_RUN_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_AUTO_RUN_SCHEDULE.to_string()),
            default_selection: LeaderboardSelection::new(
                optional("DEFAULT_TRACK").unwrap_or_else(|| DEFAULT_TRACK.to_string()),
                optional("DEFAULT_CAR").unwrap_or_else(|| DEFAULT_CAR.to_string()),
            ),
            leaderboard_image_url: Some(
                optional("LEADERBOARD_IMAGE_URL")
                    .unwrap_or_else(|| DEFAULT_LEADERBOARD_IMAGE.to_string()),
            ),
            publisher: PublisherConfig::default(),
        })
    }
}

/// Tier table and scoring weights, loaded from the licence JSON file.
#[derive(Debug, Clone)]
pub struct LicenceConfig {
    pub tiers: TierTable,
    pub weights: ScoreWeights,
}

#[derive(Deserialize)]
struct LicenceFile {
    tiers: Vec<LicenceFileTier>,
    #[serde(default)]
    weights: ScoreWeights,
}

#[derive(Deserialize)]
struct LicenceFileTier {
    name: String,
    min_score: f64,
    /// Snowflakes are kept as strings in JSON so editors do not round them.
    role_id: String,
}

impl LicenceConfig {
    /// Reads and validates the licence configuration file.
    ///
    /// # Arguments
    /// - `path` - Path to the JSON file
    ///
    /// # Returns
    /// - `Ok(LicenceConfig)` - Parsed configuration with a validated tier table
    /// - `Err(ConfigError)` - File unreadable, malformed, or tier table invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_label = path.as_ref().display().to_string();
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            ConfigError::LicenceFileRead {
                path: path_label.clone(),
                source,
            }
        })?;

        Self::from_json(&path_label, &raw)
    }

    /// Parses and validates licence configuration JSON.
    pub fn from_json(path_label: &str, raw: &str) -> Result<Self, ConfigError> {
        let file: LicenceFile =
            serde_json::from_str(raw).map_err(|source| ConfigError::LicenceFileParse {
                path: path_label.to_string(),
                source,
            })?;

        let tiers = file
            .tiers
            .into_iter()
            .map(|tier| {
                let role_id = tier.role_id.trim().parse::<u64>().map_err(|_| {
                    ConfigError::InvalidTierRole {
                        tier: tier.name.clone(),
                        value: tier.role_id.clone(),
                    }
                })?;
                Ok(LicenceTier {
                    name: tier.name,
                    min_score: tier.min_score,
                    role_id,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            tiers: TierTable::new(tiers)?,
            weights: file.weights,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required_id(name: &str) -> Result<u64, ConfigError> {
    let value = required(name)?;
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a Discord ID: {}", value, e),
        })
}

fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Parses a comma separated list of Discord IDs, ignoring blank entries.
fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: format!("'{}' is not a Discord ID: {}", part, e),
            })
        })
        .collect()
}
