// Fixtures directory lifecycle

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::utils::error::Result;

/// Recursively delete the fixtures directory if present, then recreate it.
///
/// Idempotent: safe to call when the directory does not exist yet, and calling
/// it twice leaves the same empty directory as calling it once.
pub async fn reset_fixtures(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir).await {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }

    fs::create_dir_all(dir).await?;
    debug!(dir = %dir.display(), "fixtures directory reset");

    Ok(())
}
