use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A Discord snowflake stored as text no longer parses as `u64`.
    ///
    /// Snowflakes are stored as strings since SQLite integers are signed.
    #[error("Stored {column} '{value}' is not a Discord ID: {source}")]
    CorruptStoredId {
        /// Column or file the value was read from
        column: &'static str,
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
