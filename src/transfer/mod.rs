//! Remote file store collaborator.
//!
//! The game server writes its stats and leaderboard snapshots to an FTP share, and the
//! published leaderboard message ID is kept on the same share. Services only see the
//! [`RemoteFileStore`] trait so they can be exercised against an in-memory store.

pub mod ftp;

#[cfg(test)]
pub mod memory;

use serenity::async_trait;

use crate::error::transfer::TransferError;

/// Byte-level access to named files on the remote store.
#[async_trait]
pub trait RemoteFileStore: Send + Sync {
    /// Downloads a remote file.
    ///
    /// # Arguments
    /// - `remote` - Path of the file relative to the store root
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - File contents
    /// - `Err(TransferError::NotFound)` - The file does not exist
    /// - `Err(TransferError)` - Any other transfer failure
    async fn fetch(&self, remote: &str) -> Result<Vec<u8>, TransferError>;

    /// Uploads a remote file, replacing any existing content.
    ///
    /// # Arguments
    /// - `remote` - Path of the file relative to the store root
    /// - `contents` - Bytes to write
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(TransferError)` - Transfer failure
    async fn store(&self, remote: &str, contents: &[u8]) -> Result<(), TransferError>;
}
