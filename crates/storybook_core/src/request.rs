//! Provider-neutral image generation request and response types.

use crate::AspectRatio;

/// A request for generated images.
///
/// # Examples
///
/// ```
/// use storybook_core::{AspectRatio, ImageRequest};
///
/// let request = ImageRequest::builder()
///     .prompt("A thirsty crow beside a clay pitcher")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.aspect_ratio(), AspectRatio::Portrait);
/// assert_eq!(*request.sample_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Full prompt text sent to the provider
    prompt: String,
    /// Requested aspect ratio
    #[builder(default)]
    aspect_ratio: AspectRatio,
    /// Number of images requested
    #[builder(default = "1")]
    sample_count: u32,
}

impl ImageRequest {
    /// Request for a single image.
    pub fn new(prompt: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio,
            sample_count: 1,
        }
    }

    /// Start building a request.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// One image returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GeneratedImage {
    /// Raw image bytes
    bytes: Vec<u8>,
    /// MIME type reported by the provider, if any
    mime_type: Option<String>,
}

impl GeneratedImage {
    /// Wrap raw bytes returned by the provider.
    pub fn new(bytes: Vec<u8>, mime_type: Option<String>) -> Self {
        Self { bytes, mime_type }
    }
}
