//! Environment/runtime helpers
//!
//! Sanity checks to ensure the backing document has somewhere to live at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the parent directory of `file_path` exists, creating it when missing.
pub async fn ensure_parent_dir(file_path: &Path) -> anyhow::Result<()> {
    let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_err() {
        warn!(dir = %parent.display(), "data directory not found; creating it");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    debug!(dir = %parent.display(), "data directory ready");
    Ok(())
}
