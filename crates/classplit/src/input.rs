use crate::prelude::*;
use classplit_core::split::SourceFile;

/// Read a whole source file into memory.
pub async fn load_source(path: &str) -> Result<SourceFile> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| f!("Failed to read file '{path}'"))?;

    log::debug!("read {path} ({} bytes)", content.len());

    Ok(SourceFile::new(path, content))
}

/// Read the header and implementation files, header first.
pub async fn load_pair(header: &str, implementation: &str) -> Result<(SourceFile, SourceFile)> {
    let header = load_source(header).await?;
    let implementation = load_source(implementation).await?;

    Ok((header, implementation))
}
