//! Filesystem helpers shared by the stores.

use std::path::Path;
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};

/// Write `data` to `path` through a sibling temp file and a rename.
///
/// Parent directories are created as needed. A partially written file is
/// never visible at `path`.
#[tracing::instrument(skip(data), fields(path = %path.display(), size = data.len()))]
pub async fn write_atomic(path: &Path, data: &[u8]) -> StorybookResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    if let Err(e) = tokio::fs::write(&temp_path, data).await {
        discard(&temp_path).await;
        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
        .into());
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        discard(&temp_path).await;
        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
        .into());
    }

    tracing::debug!("Wrote file");
    Ok(())
}

/// Best-effort removal of a leftover temp file.
async fn discard(temp_path: &Path) {
    if let Err(e) = tokio::fs::remove_file(temp_path).await
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(path = %temp_path.display(), error = %e, "Failed to remove temp file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let target = temp_dir.path().join("thirsty-crow-01.png");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("occupant"), b"x").unwrap();

        let result = write_atomic(&target, b"png").await;

        assert!(result.is_err());
        assert!(!temp_dir.path().join("thirsty-crow-01.png.tmp").exists());
        assert!(target.is_dir());
    }
}
