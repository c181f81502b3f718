//! Awaited waits between calls.

use async_trait::async_trait;
use std::time::Duration;

/// Something that can wait.
///
/// Every delay in the pipeline goes through this trait so tests can record
/// delays instead of sleeping through them.
#[async_trait]
pub trait Pause: Send + Sync {
    /// Wait for `duration`.
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokioPause;

#[async_trait]
impl Pause for TokioPause {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
