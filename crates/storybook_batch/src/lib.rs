//! Batch illustration of the story corpus.
//!
//! [`BatchOrchestrator`] walks the prompt catalog story by story. For every
//! scene it checks the artifact directory, generates what is missing through an
//! [`IllustrationClient`](storybook_models::IllustrationClient), and finally
//! writes the full identifier list into the story records.
//!
//! Reruns are cheap: an artifact on disk is never regenerated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod listing;
mod orchestrator;
mod outcome;

pub use listing::{Listing, ListingEntry};
pub use orchestrator::{BatchOrchestrator, Pacing};
pub use outcome::{RunSummary, StoryOutcome};
