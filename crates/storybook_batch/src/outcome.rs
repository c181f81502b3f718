//! What a batch run did.

use storybook_storage::UpdateReport;

/// Result of processing one story.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_getters::Getters)]
pub struct StoryOutcome {
    /// Story slug
    slug: String,
    /// Identifier of every scene, index-aligned with the prompts
    image_ids: Vec<String>,
    /// Scenes generated in this run
    generated: usize,
    /// Scenes whose artifact already existed
    skipped: usize,
    /// Scenes that produced no artifact
    failed: usize,
    /// Scenes a dry run would have generated
    planned: usize,
    /// Records written by the metadata update, if it ran
    metadata: Option<UpdateReport>,
    /// Why the metadata update failed, if it did
    metadata_error: Option<String>,
}

impl StoryOutcome {
    pub(crate) fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn push_id(&mut self, image_id: String) {
        self.image_ids.push(image_id);
    }

    pub(crate) fn record_generated(&mut self) {
        self.generated += 1;
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn record_failed(&mut self) {
        self.failed += 1;
    }

    pub(crate) fn record_planned(&mut self) {
        self.planned += 1;
    }

    pub(crate) fn set_metadata(&mut self, report: UpdateReport) {
        self.metadata = Some(report);
    }

    pub(crate) fn set_metadata_error(&mut self, message: String) {
        self.metadata_error = Some(message);
    }

    /// Whether any story record was rewritten.
    pub fn metadata_updated(&self) -> bool {
        self.metadata.is_some_and(|report| report.updated())
    }
}

/// Result of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_getters::Getters)]
pub struct RunSummary {
    /// Outcomes of the stories that had prompts, in processing order
    stories: Vec<StoryOutcome>,
    /// Requested slugs with no prompts
    unknown: Vec<String>,
}

impl RunSummary {
    pub(crate) fn push(&mut self, outcome: StoryOutcome) {
        self.stories.push(outcome);
    }

    pub(crate) fn push_unknown(&mut self, slug: &str) {
        self.unknown.push(slug.to_string());
    }

    /// Scenes generated across all stories.
    pub fn generated(&self) -> usize {
        self.stories.iter().map(|s| s.generated).sum()
    }

    /// Scenes skipped because their artifact existed.
    pub fn skipped(&self) -> usize {
        self.stories.iter().map(|s| s.skipped).sum()
    }

    /// Scenes left without an artifact.
    pub fn failed(&self) -> usize {
        self.stories.iter().map(|s| s.failed).sum()
    }

    /// Scenes a dry run would generate.
    pub fn planned(&self) -> usize {
        self.stories.iter().map(|s| s.planned).sum()
    }

    /// Stories whose records could not be updated.
    pub fn metadata_errors(&self) -> usize {
        self.stories
            .iter()
            .filter(|s| s.metadata_error.is_some())
            .count()
    }
}
