//! Scripted image generator and recording pause.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storybook_core::{GeneratedImage, ImageRequest};
use storybook_error::{ImagenError, ImagenErrorKind};
use storybook_models::{ImageGenerator, ImagenResult, Pause};

/// A single mock response.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    Image(Vec<u8>),
    Empty,
    Error(ImagenErrorKind),
}

/// Replays a script of responses, repeating the last one.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    script: Vec<MockResponse>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerator {
    /// Always returns one image.
    pub fn new_success() -> Self {
        Self::new_sequence(vec![MockResponse::Image(b"\x89PNG mock".to_vec())])
    }

    /// Replays `script`.
    pub fn new_sequence(script: Vec<MockResponse>) -> Self {
        Self {
            script,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of provider calls so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in order.
    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_images(&self, request: &ImageRequest) -> ImagenResult<Vec<GeneratedImage>> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(request.prompt().clone());
            prompts.len() - 1
        };
        match self.script.get(call).or_else(|| self.script.last()) {
            Some(MockResponse::Image(bytes)) => Ok(vec![GeneratedImage::new(bytes.clone(), None)]),
            Some(MockResponse::Error(kind)) => Err(ImagenError::new(kind.clone())),
            Some(MockResponse::Empty) | None => Ok(Vec::new()),
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
