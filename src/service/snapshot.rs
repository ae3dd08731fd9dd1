//! Loading of the stats and leaderboard snapshots from the remote store.

use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    config::RemoteFiles,
    error::{snapshot::SnapshotError, AppError},
    model::{driver::DriverStats, leaderboard::LeaderboardData},
    transfer::RemoteFileStore,
};

/// Service fetching and decoding the snapshot files written by the game server.
pub struct SnapshotService<'a> {
    store: &'a dyn RemoteFileStore,
    files: &'a RemoteFiles,
}

impl<'a> SnapshotService<'a> {
    pub fn new(store: &'a dyn RemoteFileStore, files: &'a RemoteFiles) -> Self {
        Self { store, files }
    }

    /// Fetches every driver's statistics from the rank snapshot.
    ///
    /// Records that are not objects are logged and dropped so one bad entry cannot
    /// stop a licence run for everyone else.
    ///
    /// # Returns
    /// - `Ok(Vec<DriverStats>)` - Decoded records, fields defaulted where unreadable
    /// - `Err(AppError::TransferErr)` - Download failed
    /// - `Err(AppError::SnapshotErr)` - File is not a JSON array
    pub async fn fetch_driver_stats(&self) -> Result<Vec<DriverStats>, AppError> {
        let records: Vec<serde_json::Value> = self.fetch_json(&self.files.rank).await?;

        let stats = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match DriverStats::deserialize(&record) {
                Ok(stats) => Some(stats),
                Err(e) => {
                    tracing::warn!(
                        "Dropping record {} of '{}': {}",
                        index,
                        self.files.rank,
                        e
                    );
                    None
                }
            })
            .collect();

        Ok(stats)
    }

    /// Fetches the lap-time leaderboard snapshot.
    ///
    /// # Returns
    /// - `Ok(LeaderboardData)` - Track → car → entries
    /// - `Err(AppError::TransferErr)` - Download failed
    /// - `Err(AppError::SnapshotErr)` - File does not have the expected shape
    pub async fn fetch_leaderboard(&self) -> Result<LeaderboardData, AppError> {
        self.fetch_json(&self.files.leaderboard).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, remote: &str) -> Result<T, AppError> {
        let bytes = self.store.fetch(remote).await?;

        let value = serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Decode {
            remote: remote.to_string(),
            source,
        })?;

        Ok(value)
    }
}
