use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be interpreted.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// The licence configuration file could not be read.
    #[error("Failed to read licence configuration {path}: {source}")]
    LicenceFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The licence configuration file is not valid JSON for the expected shape.
    #[error("Failed to parse licence configuration {path}: {source}")]
    LicenceFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The tier table has no tiers at all.
    #[error("Licence tier table is empty")]
    EmptyTierTable,

    /// Tier thresholds are not strictly descending.
    #[error("Licence tier '{tier}' (min {min_score}) must have a lower threshold than '{previous}' (min {previous_min_score})")]
    UnorderedTiers {
        tier: String,
        min_score: f64,
        previous: String,
        previous_min_score: f64,
    },

    /// The last tier does not catch every non-positive score.
    #[error("Lowest licence tier '{tier}' has threshold {min_score}; the floor tier must have a threshold of 0 or lower")]
    MissingFloorTier { tier: String, min_score: f64 },

    /// A threshold is NaN or infinite.
    #[error("Licence tier '{0}' has a non-finite threshold")]
    NonFiniteThreshold(String),

    /// A tier's role ID is not a Discord snowflake.
    #[error("Licence tier '{tier}' has invalid role ID '{value}'")]
    InvalidTierRole { tier: String, value: String },

    /// Two tiers share the same Discord role.
    #[error("Role {role_id} is used by more than one licence tier")]
    DuplicateTierRole { role_id: u64 },
}
