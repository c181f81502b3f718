//! One-file-per-slug story record directory.

use crate::{StoryRecord, write_atomic};
use std::path::PathBuf;
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};

/// A directory of `<slug>.json` story records.
///
/// A missing directory behaves like an empty one.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct StoryStore {
    /// Directory holding the records
    dir: PathBuf,
}

impl StoryStore {
    /// Store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the record for `slug`.
    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{slug}.json"))
    }

    /// Whether a record file exists for `slug`.
    pub async fn contains(&self, slug: &str) -> bool {
        tokio::fs::try_exists(self.path_for(slug))
            .await
            .unwrap_or(false)
    }

    /// Load the record for `slug`, or `None` if there is no file.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn load(&self, slug: &str) -> StorybookResult<Option<StoryRecord>> {
        let path = self.path_for(slug);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No story record");
                return Ok(None);
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };
        StoryRecord::from_json(&text).map(Some)
    }

    /// Write the record for `slug`.
    #[tracing::instrument(skip(self, record), fields(dir = %self.dir.display()))]
    pub async fn save(&self, slug: &str, record: &StoryRecord) -> StorybookResult<()> {
        let text = record.to_json()?;
        write_atomic(&self.path_for(slug), text.as_bytes()).await
    }

    /// Whether the record for `slug` exists and references any image.
    pub async fn has_images(&self, slug: &str) -> StorybookResult<bool> {
        Ok(self
            .load(slug)
            .await?
            .is_some_and(|record| record.has_images()))
    }
}
