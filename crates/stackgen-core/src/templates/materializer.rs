//! Writing a resolved FileSet to disk

use super::fileset::FileSet;
use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create `root` and write every file of `set` below it, in FileSet order.
///
/// The first I/O failure aborts; files written before it stay on disk.
/// Returns the paths written.
pub async fn materialize(set: &FileSet, root: &Path) -> Result<Vec<PathBuf>> {
    if let Ok(metadata) = fs::metadata(root).await {
        if !metadata.is_dir() {
            return Err(ScaffoldError::TargetNotDirectory(root.to_path_buf()));
        }
    }

    fs::create_dir_all(root)
        .await
        .map_err(|e| ScaffoldError::io(root, e))?;

    let mut written = Vec::with_capacity(set.len());
    for file in set.files() {
        let target_path = root.join(&file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io(parent, e))?;
        }

        fs::write(&target_path, &file.content)
            .await
            .map_err(|e| ScaffoldError::io(&target_path, e))?;

        written.push(target_path);
    }

    Ok(written)
}

/// Whether `path` is an existing directory with at least one entry
pub async fn is_non_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path).await {
        Ok(mut entries) => matches!(entries.next_entry().await, Ok(Some(_))),
        Err(_) => false,
    }
}
