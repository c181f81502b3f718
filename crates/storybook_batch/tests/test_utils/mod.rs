//! Test utilities for batch tests.

pub mod mock_imagen;

#[allow(unused_imports)]
pub use mock_imagen::{MockImageGenerator, MockResponse, RecordingPause};
