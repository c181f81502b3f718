//! Core data types for the storybook illustration pipeline.
//!
//! This crate holds the pieces every other crate agrees on:
//! - the authored [`PromptCatalog`] mapping story slugs to scene prompts
//! - deterministic artifact naming ([`short_name`], [`image_id`])
//! - the provider-neutral [`ImageRequest`] / [`GeneratedImage`] pair
//! - [`AspectRatio`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod aspect;
mod catalog;
mod prompts;
mod request;

pub use artifact::{CATEGORY_PREFIXES, IMAGE_EXTENSION, image_file_name, image_id, short_name};
pub use aspect::AspectRatio;
pub use catalog::{COST_PER_IMAGE_USD, PromptCatalog};
pub use prompts::STORY_PROMPTS;
pub use request::{GeneratedImage, ImageRequest, ImageRequestBuilder, ImageRequestBuilderError};
