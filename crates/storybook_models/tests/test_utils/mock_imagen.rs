//! Mock image generator for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storybook_core::{GeneratedImage, ImageRequest};
use storybook_error::{ImagenError, ImagenErrorKind};
use storybook_models::{ImageGenerator, ImagenResult, Pause};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return one image with the given bytes
    Success(Vec<u8>),
    /// Always return the specified error
    Error(ImagenErrorKind),
    /// Always return no images
    Empty,
    /// Return a sequence of responses, repeating the last one
    Sequence(Vec<MockResponse>),
}

/// A single mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Image(Vec<u8>),
    Empty,
    Error(ImagenErrorKind),
}

/// Mock image generator for testing.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<ImageRequest>>>,
}

impl MockImageGenerator {
    /// Create a mock that always returns one image.
    pub fn new_success(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(bytes.into()))
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: ImagenErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock that never returns images.
    pub fn new_empty() -> Self {
        Self::new_with_behavior(MockBehavior::Empty)
    }

    /// Create a mock with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate_images() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(response: &MockResponse) -> ImagenResult<Vec<GeneratedImage>> {
        match response {
            MockResponse::Image(bytes) => Ok(vec![GeneratedImage::new(
                bytes.clone(),
                Some("image/png".to_string()),
            )]),
            MockResponse::Empty => Ok(Vec::new()),
            MockResponse::Error(kind) => Err(ImagenError::new(kind.clone())),
        }
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_images(&self, request: &ImageRequest) -> ImagenResult<Vec<GeneratedImage>> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };

        match &self.behavior {
            MockBehavior::Success(bytes) => Self::respond(&MockResponse::Image(bytes.clone())),
            MockBehavior::Error(kind) => Self::respond(&MockResponse::Error(kind.clone())),
            MockBehavior::Empty => Self::respond(&MockResponse::Empty),
            MockBehavior::Sequence(responses) => {
                let response = responses
                    .get(call)
                    .or_else(|| responses.last())
                    .unwrap_or(&MockResponse::Empty);
                Self::respond(response)
            }
        }
    }

    fn model_name(&self) -> &str {
        "mock-imagen"
    }
}

/// Records requested delays instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingPause {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every delay requested so far, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pause for RecordingPause {
    async fn pause(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}
