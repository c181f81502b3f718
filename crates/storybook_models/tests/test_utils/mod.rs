//! Test utilities for image generation tests.
//!
//! This module provides a scripted image generator and a pause that records
//! delays instead of sleeping.

pub mod mock_imagen;

#[allow(unused_imports)]
pub use mock_imagen::{MockBehavior, MockImageGenerator, MockResponse, RecordingPause};
