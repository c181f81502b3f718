//! Styled, retrying illustration generation.

use crate::{ImageGenerator, Pause, TokioPause};
use std::path::Path;
use storybook_core::{AspectRatio, ImageRequest};
use storybook_error::StorybookResult;
use storybook_rate_limit::{AttemptFailure, FaultClass, RetryPolicy, truncate_fault};
use storybook_storage::write_atomic;
use tracing::{info, instrument, warn};

/// Generates one illustration per call with bounded retry.
///
/// Every prompt is prefixed with the style preamble. Each attempt asks for
/// exactly one image; the first returned image is written to the destination.
/// Between failed attempts the client waits for the delay the
/// [`RetryPolicy`] assigns to the failure.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use storybook_core::AspectRatio;
/// use storybook_models::{IllustrationClient, VertexImagenClient};
/// use storybook_rate_limit::{ImagenConfig, RetryPolicy};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let imagen = VertexImagenClient::new(&ImagenConfig::default())?;
/// let client = IllustrationClient::new(imagen, "Watercolor. ", RetryPolicy::default());
/// let saved = client
///     .generate("A crow", Path::new("crow.png"), AspectRatio::Portrait, 1)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IllustrationClient<G, P = TokioPause> {
    generator: G,
    preamble: String,
    policy: RetryPolicy,
    pause: P,
}

impl<G: ImageGenerator> IllustrationClient<G> {
    /// Client that sleeps on the tokio timer between attempts.
    pub fn new(generator: G, preamble: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            generator,
            preamble: preamble.into(),
            policy,
            pause: TokioPause,
        }
    }
}

impl<G: ImageGenerator, P: Pause> IllustrationClient<G, P> {
    /// Replace how the client waits.
    pub fn with_pause<Q: Pause>(self, pause: Q) -> IllustrationClient<G, Q> {
        IllustrationClient {
            generator: self.generator,
            preamble: self.preamble,
            policy: self.policy,
            pause,
        }
    }

    /// Underlying provider.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Retry delays and default attempt budget.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// How the client waits.
    pub fn pause(&self) -> &P {
        &self.pause
    }

    /// `prompt` with the style preamble in front.
    pub fn styled_prompt(&self, prompt: &str) -> String {
        format!("{}{}", self.preamble, prompt)
    }

    /// Generate one illustration for `prompt` and write it to `destination`.
    ///
    /// Returns `Ok(true)` once an image is written and `Ok(false)` after
    /// `max_attempts` attempts without one. Provider faults never escape;
    /// only a failure to write the image is an error.
    #[instrument(
        skip(self, prompt),
        fields(
            model = self.generator.model_name(),
            destination = %destination.display(),
            aspect = %aspect_ratio,
        )
    )]
    pub async fn generate(
        &self,
        prompt: &str,
        destination: &Path,
        aspect_ratio: AspectRatio,
        max_attempts: u32,
    ) -> StorybookResult<bool> {
        let request = ImageRequest::new(self.styled_prompt(prompt), aspect_ratio);

        for attempt in 1..=max_attempts {
            let failure = match self.generator.generate_images(&request).await {
                Ok(images) => match images.into_iter().next() {
                    Some(image) => {
                        write_atomic(destination, image.bytes()).await?;
                        info!(attempt, "Image saved");
                        return Ok(true);
                    }
                    None => {
                        warn!(attempt, max_attempts, "Empty response");
                        AttemptFailure::EmptyResponse
                    }
                },
                Err(e) => {
                    let message = e.message();
                    let failure = AttemptFailure::from_fault(&message);
                    match failure {
                        AttemptFailure::Fault(FaultClass::RateLimited) => {
                            warn!(attempt, max_attempts, "Rate limited");
                        }
                        _ => {
                            warn!(
                                attempt,
                                max_attempts,
                                error = truncate_fault(&message),
                                "Generation failed"
                            );
                        }
                    }
                    failure
                }
            };

            if attempt < max_attempts {
                let delay = self.policy.delay_for(failure, attempt);
                info!(delay_secs = delay.as_secs(), %failure, "Waiting before retry");
                self.pause.pause(delay).await;
            }
        }

        warn!(max_attempts, "No image after all attempts");
        Ok(false)
    }
}
