use thiserror::Error;

/// Failures of the remote file store.
///
/// None of these are retried in-process; the next scheduled run tries again.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The FTP session failed (connect, login, transfer or quit).
    #[error("FTP operation on '{remote}' failed: {source}")]
    Ftp {
        remote: String,
        #[source]
        source: suppaftp::FtpError,
    },

    /// The requested remote file does not exist.
    #[error("Remote file '{0}' not found")]
    NotFound(String),

    /// The blocking transfer task panicked or was cancelled.
    #[error("Transfer task for '{remote}' did not complete: {source}")]
    Join {
        remote: String,
        #[source]
        source: tokio::task::JoinError,
    },
}
