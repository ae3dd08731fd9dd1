//! FTP implementation of the remote file store.
//!
//! Every operation opens its own session, runs the transfer and closes the session
//! again, so no connection outlives the call that needed it. `suppaftp`'s client is
//! blocking and runs on tokio's blocking pool.

use serenity::async_trait;
use std::io::Cursor;
use suppaftp::{FtpError, FtpStream, Status};

use crate::{config::FtpConfig, error::transfer::TransferError, transfer::RemoteFileStore};

const DEFAULT_FTP_PORT: u16 = 21;

/// Remote file store backed by the game server's FTP share.
#[derive(Debug, Clone)]
pub struct FtpFileStore {
    config: FtpConfig,
}

impl FtpFileStore {
    pub fn new(config: FtpConfig) -> Self {
        Self { config }
    }

    /// Runs `operation` inside a fresh, logged-in session.
    ///
    /// The session is closed whether or not the operation succeeds; a failure to quit
    /// cleanly is only logged because the transfer itself has already completed.
    async fn with_session<T, F>(&self, remote: &str, operation: F) -> Result<T, TransferError>
    where
        T: Send + 'static,
        F: FnOnce(&mut FtpStream) -> Result<T, FtpError> + Send + 'static,
    {
        let config = self.config.clone();
        let remote_name = remote.to_string();

        let task_remote = remote_name.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut stream = FtpStream::connect(address(&config.host))?;
            stream.login(&config.user, &config.password)?;

            let result = operation(&mut stream);

            if let Err(e) = stream.quit() {
                tracing::debug!("Failed to close FTP session for '{}': {}", task_remote, e);
            }

            result
        })
        .await
        .map_err(|source| TransferError::Join {
            remote: remote_name.clone(),
            source,
        })?;

        result.map_err(|source| map_ftp_error(&remote_name, source))
    }
}

#[async_trait]
impl RemoteFileStore for FtpFileStore {
    async fn fetch(&self, remote: &str) -> Result<Vec<u8>, TransferError> {
        let path = remote.to_string();
        let bytes = self
            .with_session(remote, move |stream| {
                stream.retr_as_buffer(&path).map(Cursor::into_inner)
            })
            .await?;

        tracing::debug!("Downloaded '{}' ({} bytes)", remote, bytes.len());

        Ok(bytes)
    }

    async fn store(&self, remote: &str, contents: &[u8]) -> Result<(), TransferError> {
        let path = remote.to_string();
        let mut reader = Cursor::new(contents.to_vec());
        let written = self
            .with_session(remote, move |stream| stream.put_file(&path, &mut reader))
            .await?;

        tracing::debug!("Uploaded '{}' ({} bytes)", remote, written);

        Ok(())
    }
}

/// Appends the default FTP port unless the host already names one.
fn address(host: &str) -> String {
    let host = host.trim();
    if host.contains(':') {
        host.to_string()
    } else {
        format!("{}:{}", host, DEFAULT_FTP_PORT)
    }
}

/// Maps "file unavailable" replies to `NotFound` so callers can tell a missing file
/// from a broken connection.
fn map_ftp_error(remote: &str, error: FtpError) -> TransferError {
    match error {
        FtpError::UnexpectedResponse(ref response) if response.status == Status::FileUnavailable => {
            TransferError::NotFound(remote.to_string())
        }
        source => TransferError::Ftp {
            remote: remote.to_string(),
            source,
        },
    }
}
