//! Storybook - illustrations for a children's story corpus
//!
//! Generates one watercolor illustration per story section with Google Imagen
//! on Vertex AI, then records the image identifiers in the story JSON.
//!
//! # Binaries
//!
//! - `generate-story-images` walks the whole prompt catalog (or one story),
//!   skipping scenes whose image already exists.
//! - `generate-story-image` renders a single prompt to a single file.
//!
//! # Architecture
//!
//! - `storybook_error` - Error types
//! - `storybook_core` - Prompt catalog, artifact naming, request types
//! - `storybook_rate_limit` - Fault classification, retry policy, configuration
//! - `storybook_storage` - Story records and image artifacts
//! - `storybook_models` - Imagen client and retrying illustration client
//! - `storybook_batch` - Batch orchestration
//!
//! This crate re-exports the public surface of each for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
mod logging;

pub use logging::{JSON_LOGS_ENV, LoggingConfig, init_logging};

pub use storybook_batch::{
    BatchOrchestrator, Listing, ListingEntry, Pacing, RunSummary, StoryOutcome,
};
pub use storybook_core::{
    AspectRatio, GeneratedImage, ImageRequest, PromptCatalog, STORY_PROMPTS, image_id, short_name,
};
pub use storybook_error::{
    ConfigError, ImagenError, ImagenErrorKind, JsonError, StorageError, StorageErrorKind,
    StorybookError, StorybookErrorKind, StorybookResult,
};
pub use storybook_models::{
    AccessTokenSource, GcloudTokenSource, IllustrationClient, ImageGenerator, Pause, TokioPause,
    VertexImagenClient,
};
pub use storybook_rate_limit::{
    AttemptFailure, FaultClass, RetryPolicy, StorybookConfig, classify_fault,
};
pub use storybook_storage::{
    ArtifactStore, MetadataUpdater, StoryRecord, StoryStore, UpdateReport,
};
