use crate::prelude::*;
use classplit_core::split::SplitFile;
use std::path::{Path, PathBuf};

/// Write every split file into `dir`, creating it if needed.
///
/// Files are written independently: a failed write is logged and the rest
/// are still attempted. Existing files are truncated.
pub async fn write_split_files(dir: &Path, files: &[SplitFile]) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| f!("Failed to create output directory '{}'", dir.display()))?;

    let mut written = Vec::with_capacity(files.len());
    let mut failed = Vec::new();

    for file in files {
        let path = dir.join(&file.name);
        match tokio::fs::write(&path, &file.content).await {
            Ok(()) => {
                log::info!("wrote {}", path.display());
                written.push(path);
            }
            Err(e) => {
                log::error!("failed to write {}: {}", path.display(), e);
                failed.push(file.name.as_str());
            }
        }
    }

    if !failed.is_empty() {
        return Err(eyre!("Failed to write: {}", failed.join(", ")));
    }

    Ok(written)
}
