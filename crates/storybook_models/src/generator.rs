//! The seam between the retry loop and the image provider.

use async_trait::async_trait;
use storybook_core::{GeneratedImage, ImageRequest};
use storybook_error::ImagenError;

/// Result type for a single provider call.
pub type ImagenResult<T> = Result<T, ImagenError>;

/// One call to an image provider.
///
/// An empty `Ok` vector is a valid answer and is distinct from a fault.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Request images for `request`.
    async fn generate_images(&self, request: &ImageRequest) -> ImagenResult<Vec<GeneratedImage>>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<G: ImageGenerator + ?Sized> ImageGenerator for std::sync::Arc<G> {
    async fn generate_images(&self, request: &ImageRequest) -> ImagenResult<Vec<GeneratedImage>> {
        (**self).generate_images(request).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
