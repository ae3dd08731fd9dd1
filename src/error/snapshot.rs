use thiserror::Error;

/// Failure to decode a downloaded snapshot file.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to decode '{remote}': {source}")]
    Decode {
        remote: String,
        #[source]
        source: serde_json::Error,
    },
}
