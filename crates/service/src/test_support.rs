#![cfg(test)]
use std::path::{Path, PathBuf};

use tokio::fs::{self, File, OpenOptions};
use uuid::Uuid;

/// A uniquely named file under the system temp dir, removed on drop.
pub struct TempDocument {
    path: PathBuf,
}

impl TempDocument {
    pub async fn with_contents(initial: &str) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("league_{}.json", Uuid::new_v4()));
        fs::write(&path, initial).await?;
        Ok(Self { path })
    }

    /// Fresh read+write handle on the document.
    pub async fn open(&self) -> std::io::Result<File> {
        OpenOptions::new().read(true).write(true).open(&self.path).await
    }

    pub async fn contents(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.path).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDocument {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
