//! Writes generated image identifiers into story records.

use crate::StoryStore;
use storybook_error::StorybookResult;
use tracing::{debug, info, instrument};

/// What [`MetadataUpdater::apply`] wrote.
///
/// `None` means no record existed in that tree; `Some(n)` is the number of
/// sections whose image reference was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_getters::Getters)]
pub struct UpdateReport {
    /// Sections written in the primary-language record
    primary: Option<usize>,
    /// Sections written in the secondary-language record
    secondary: Option<usize>,
}

impl UpdateReport {
    /// Whether any record was written.
    pub fn updated(&self) -> bool {
        self.primary.is_some() || self.secondary.is_some()
    }
}

/// Applies an index-aligned identifier list to both language trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataUpdater {
    primary: StoryStore,
    secondary: StoryStore,
}

impl MetadataUpdater {
    /// Updater over a primary and a secondary record store.
    pub fn new(primary: StoryStore, secondary: StoryStore) -> Self {
        Self { primary, secondary }
    }

    /// Primary-language store.
    pub fn primary(&self) -> &StoryStore {
        &self.primary
    }

    /// Secondary-language store.
    pub fn secondary(&self) -> &StoryStore {
        &self.secondary
    }

    /// Set `sections[i].image = image_ids[i]` in the records for `slug`.
    ///
    /// Without a primary record nothing is done, the secondary record
    /// included. The secondary record is updated only if its file exists.
    /// No check is made that the section count matches `image_ids.len()`.
    #[instrument(skip(self, image_ids), fields(ids = image_ids.len()))]
    pub async fn apply(&self, slug: &str, image_ids: &[String]) -> StorybookResult<UpdateReport> {
        let Some(mut record) = self.primary.load(slug).await? else {
            debug!("No primary record, skipping metadata update");
            return Ok(UpdateReport::default());
        };

        let primary = record.apply_images(image_ids)?;
        self.primary.save(slug, &record).await?;
        info!(sections = primary, "Updated primary record");

        if !self.secondary.contains(slug).await {
            debug!("No secondary record");
            return Ok(UpdateReport {
                primary: Some(primary),
                secondary: None,
            });
        }

        let secondary = match self.secondary.load(slug).await? {
            Some(mut translated) => {
                let written = translated.apply_images(image_ids)?;
                self.secondary.save(slug, &translated).await?;
                info!(sections = written, "Updated secondary record");
                Some(written)
            }
            None => None,
        };

        Ok(UpdateReport {
            primary: Some(primary),
            secondary,
        })
    }
}
