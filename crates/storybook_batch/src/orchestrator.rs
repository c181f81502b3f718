//! Story-by-story illustration driver.

use crate::{Listing, ListingEntry, RunSummary, StoryOutcome};
use std::time::Duration;
use storybook_core::{AspectRatio, COST_PER_IMAGE_USD, PromptCatalog, image_id};
use storybook_error::StorybookResult;
use storybook_models::{IllustrationClient, ImageGenerator, Pause, TokioPause};
use storybook_rate_limit::{BatchConfig, StorybookConfig};
use storybook_storage::{ArtifactStore, MetadataUpdater, StoryStore};
use tracing::{debug, error, info, instrument, warn};

/// Waits between scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// After every attempted generation
    pub throttle: Duration,
    /// After a scene fails with a hard error
    pub failure_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from(&BatchConfig::default())
    }
}

impl From<&BatchConfig> for Pacing {
    fn from(config: &BatchConfig) -> Self {
        Self {
            throttle: Duration::from_millis(config.throttle_millis),
            failure_pause: Duration::from_millis(config.failure_pause_millis),
        }
    }
}

/// Walks the catalog and fills in missing illustrations.
///
/// Strictly sequential: one story, one scene, one provider call at a time.
/// Every wait goes through the client's [`Pause`].
#[derive(Debug)]
pub struct BatchOrchestrator<G, P = TokioPause> {
    catalog: PromptCatalog,
    client: IllustrationClient<G, P>,
    artifacts: ArtifactStore,
    updater: MetadataUpdater,
    pacing: Pacing,
    cost_per_image: f64,
}

impl<G: ImageGenerator, P: Pause> BatchOrchestrator<G, P> {
    /// Orchestrator with default pacing and pricing.
    pub fn new(
        catalog: PromptCatalog,
        client: IllustrationClient<G, P>,
        artifacts: ArtifactStore,
        updater: MetadataUpdater,
    ) -> Self {
        Self {
            catalog,
            client,
            artifacts,
            updater,
            pacing: Pacing::default(),
            cost_per_image: COST_PER_IMAGE_USD,
        }
    }

    /// Orchestrator over the built-in catalog and the configured layout.
    pub fn from_config(client: IllustrationClient<G, P>, config: &StorybookConfig) -> Self {
        let paths = &config.paths;
        Self::new(
            PromptCatalog::builtin(),
            client,
            ArtifactStore::new(paths.images_dir()),
            MetadataUpdater::new(
                StoryStore::new(paths.primary_dir()),
                StoryStore::new(paths.secondary_dir()),
            ),
        )
        .with_pacing(Pacing::from(&config.batch))
        .with_cost_per_image(config.batch.cost_per_image_usd)
    }

    /// Replace the waits between scenes.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Replace the per-image cost estimate.
    pub fn with_cost_per_image(mut self, cost_per_image: f64) -> Self {
        self.cost_per_image = cost_per_image;
        self
    }

    /// The illustration client.
    pub fn client(&self) -> &IllustrationClient<G, P> {
        &self.client
    }

    /// The prompt catalog.
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Process one story, or every story in slug order.
    ///
    /// Unknown slugs are logged and skipped. The artifact directory is created
    /// first unless `dry_run` is set; a dry run writes nothing.
    #[instrument(skip(self))]
    pub async fn run(&self, story: Option<&str>, dry_run: bool) -> StorybookResult<RunSummary> {
        if !dry_run {
            self.artifacts.ensure_dir().await?;
        }

        let mut summary = RunSummary::default();
        match story {
            Some(slug) => {
                info!(story = slug, "Processing single story");
                match self.process_story(slug, dry_run).await? {
                    Some(outcome) => summary.push(outcome),
                    None => summary.push_unknown(slug),
                }
            }
            None => {
                let cost = self.catalog.estimated_cost(self.cost_per_image);
                info!(
                    stories = self.catalog.len(),
                    images = self.catalog.total_images(),
                    estimated_cost = %format!("${:.2}", cost),
                    "Generating images for every story"
                );
                for slug in self.catalog.slugs() {
                    if let Some(outcome) = self.process_story(slug, dry_run).await? {
                        summary.push(outcome);
                    }
                }
            }
        }

        info!(
            generated = summary.generated(),
            skipped = summary.skipped(),
            failed = summary.failed(),
            planned = summary.planned(),
            metadata_errors = summary.metadata_errors(),
            "Done!"
        );
        Ok(summary)
    }

    /// Generate the missing scenes of `slug`, then update its records.
    ///
    /// Returns `None` when the catalog has no prompts for `slug`. A scene that
    /// fails is logged and the story carries on. A record that cannot be
    /// updated is logged and kept on the outcome.
    #[instrument(skip(self))]
    pub async fn process_story(
        &self,
        slug: &str,
        dry_run: bool,
    ) -> StorybookResult<Option<StoryOutcome>> {
        let Some(prompts) = self.catalog.get(slug) else {
            warn!("No prompts defined for {}, skipping", slug);
            return Ok(None);
        };
        info!(sections = prompts.len(), "Story");

        let max_attempts = self.client.policy().max_attempts();
        let pause = self.client.pause();
        let mut outcome = StoryOutcome::new(slug);

        for (index, prompt) in prompts.iter().enumerate() {
            let id = image_id(slug, index);
            outcome.push_id(id.clone());

            if self.artifacts.exists(&id).await {
                debug!(image = %id, "Artifact exists, skipping");
                outcome.record_skipped();
                continue;
            }

            if dry_run {
                info!("[DRY RUN] Would generate {}.png", id);
                outcome.record_planned();
                continue;
            }

            info!(image = %id, "Generating");
            let destination = self.artifacts.path_for(&id);
            match self
                .client
                .generate(prompt, &destination, AspectRatio::default(), max_attempts)
                .await
            {
                Ok(true) => {
                    info!(image = %id, "Saved");
                    outcome.record_generated();
                }
                Ok(false) => {
                    warn!(image = %id, "No image returned");
                    outcome.record_failed();
                }
                Err(e) => {
                    error!(image = %id, error = %e, "Error generating image");
                    outcome.record_failed();
                    pause.pause(self.pacing.failure_pause).await;
                    continue;
                }
            }

            pause.pause(self.pacing.throttle).await;
        }

        if !dry_run {
            match self.updater.apply(slug, outcome.image_ids()).await {
                Ok(report) => {
                    if report.updated() {
                        info!("Updated story records with image references");
                    }
                    outcome.set_metadata(report);
                }
                Err(e) => {
                    error!(error = %e, "Failed to update story records");
                    outcome.set_metadata_error(e.to_string());
                }
            }
        }

        Ok(Some(outcome))
    }

    /// Scene counts and image status for every catalog entry.
    ///
    /// Status comes from the primary records, not the artifact directory. An
    /// unreadable record lists as needing images.
    #[instrument(skip(self))]
    pub async fn list(&self) -> StorybookResult<Listing> {
        let mut entries = Vec::with_capacity(self.catalog.len());
        for (slug, prompts) in self.catalog.iter() {
            let has_images = match self.updater.primary().has_images(slug).await {
                Ok(has_images) => has_images,
                Err(e) => {
                    warn!(story = slug, error = %e, "Unreadable story record");
                    false
                }
            };
            entries.push(ListingEntry::new(slug, prompts.len(), has_images));
        }
        Ok(Listing::new(entries, self.cost_per_image))
    }
}
