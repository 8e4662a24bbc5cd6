use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation error: {0}")]
    Validation(String),
    /// The backing document exists but is not a valid league.
    #[error("cannot decode league document: {0}")]
    Decode(#[source] serde_json::Error),
    /// The backing document lists the same player more than once.
    #[error("duplicate player in league document: {0}")]
    DuplicatePlayer(String),
    #[error("cannot encode league document: {0}")]
    Encode(#[source] serde_json::Error),
    /// Read/write/truncate failure on the backing document. After a failed
    /// write the in-memory league may be ahead of what is on disk.
    #[error("league document io error: {0}")]
    Io(#[from] std::io::Error),
}
