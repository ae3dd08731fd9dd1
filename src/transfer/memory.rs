//! In-memory remote file store for tests.

use serenity::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use crate::{error::transfer::TransferError, transfer::RemoteFileStore};

/// Remote store holding files in a map, with switchable failures.
#[derive(Default)]
pub struct MemoryFileStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
    failing: Mutex<HashSet<String>>,
    stores: Mutex<Vec<String>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, remote: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.put(remote, contents);
        self
    }

    pub fn put(&self, remote: &str, contents: impl Into<Vec<u8>>) {
        self.files
            .lock()
            .unwrap()
            .insert(remote.to_string(), contents.into());
    }

    /// Makes every fetch and store of `remote` fail with a transfer error.
    pub fn fail(&self, remote: &str) {
        self.failing.lock().unwrap().insert(remote.to_string());
    }

    pub fn read(&self, remote: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(remote)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Names of every file written, in order.
    pub fn stores(&self) -> Vec<String> {
        self.stores.lock().unwrap().clone()
    }

    fn check(&self, remote: &str) -> Result<(), TransferError> {
        if self.failing.lock().unwrap().contains(remote) {
            return Err(TransferError::Ftp {
                remote: remote.to_string(),
                source: suppaftp::FtpError::ConnectionError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset",
                )),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteFileStore for MemoryFileStore {
    async fn fetch(&self, remote: &str) -> Result<Vec<u8>, TransferError> {
        self.check(remote)?;
        self.files
            .lock()
            .unwrap()
            .get(remote)
            .cloned()
            .ok_or_else(|| TransferError::NotFound(remote.to_string()))
    }

    async fn store(&self, remote: &str, contents: &[u8]) -> Result<(), TransferError> {
        self.check(remote)?;
        self.stores.lock().unwrap().push(remote.to_string());
        self.put(remote, contents.to_vec());
        Ok(())
    }
}
