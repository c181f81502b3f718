//! Generated image artifacts.

use std::path::PathBuf;
use storybook_core::image_file_name;
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};

/// Directory of generated artifacts, one `<image_id>.png` per scene.
///
/// A file's presence is the only record that its scene is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Store rooted at `dir`. Nothing is created until [`ensure_dir`](Self::ensure_dir).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the artifact for `image_id`.
    pub fn path_for(&self, image_id: &str) -> PathBuf {
        self.dir.join(image_file_name(image_id))
    }

    /// Whether the artifact for `image_id` already exists.
    pub async fn exists(&self, image_id: &str) -> bool {
        tokio::fs::try_exists(self.path_for(image_id))
            .await
            .unwrap_or(false)
    }

    /// Create the artifact directory if needed.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn ensure_dir(&self) -> StorybookResult<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.dir.display(),
                e
            )))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let store = ArtifactStore::new("/corpus/stories/images");
        assert_eq!(
            store.path_for("thirsty-crow-01"),
            PathBuf::from("/corpus/stories/images/thirsty-crow-01.png")
        );
    }
}
