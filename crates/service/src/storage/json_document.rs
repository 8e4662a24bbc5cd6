use std::io::SeekFrom;

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tracing::debug;

use crate::errors::StoreError;

/// A JSON value persisted as the entire contents of one open file.
///
/// Every write replaces the whole file, so the document on disk is always a
/// complete snapshot. Whoever owns this handle is expected to serialize
/// access to it; there is no cross-process locking.
pub struct JsonDocument {
    file: File,
}

impl JsonDocument {
    /// Wrap a file opened for both reading and writing.
    pub fn new(file: File) -> Self {
        Self { file }
    }

    /// Decode the whole file. An empty (or whitespace-only) file decodes to
    /// `T::default()`; anything else must be valid JSON for `T`.
    pub async fn read<T>(&mut self) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        self.file.seek(SeekFrom::Start(0)).await?;
        let mut bytes = Vec::new();
        self.file.read_to_end(&mut bytes).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("backing document empty");
            return Ok(T::default());
        }
        serde_json::from_slice(&bytes).map_err(StoreError::Decode)
    }

    /// Replace the file contents with `value`: seek to start, truncate, write, flush.
    pub async fn rewrite<T>(&mut self, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(value).map_err(StoreError::Encode)?;
        self.file.seek(SeekFrom::Start(0)).await?;
        self.file.set_len(0).await?;
        self.file.write_all(&data).await?;
        self.file.flush().await?;
        debug!(bytes = data.len(), "backing document rewritten");
        Ok(())
    }
}
