//! Bearer tokens for Vertex AI.

use crate::ImagenResult;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use storybook_error::{ImagenError, ImagenErrorKind};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Environment variable checked before falling back to `gcloud`.
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Reuse window for a token printed by `gcloud`. Tokens live for an hour.
const TOKEN_REUSE: Duration = Duration::from_secs(45 * 60);

/// Supplies OAuth bearer tokens.
#[async_trait]
pub trait AccessTokenSource: Send + Sync + std::fmt::Debug {
    /// A token valid for at least the next request.
    async fn access_token(&self) -> ImagenResult<String>;
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    fetched: Instant,
}

/// Application-default credentials through the `gcloud` CLI.
///
/// `GOOGLE_OAUTH_ACCESS_TOKEN` wins when set and non-empty. Otherwise
/// `gcloud auth application-default print-access-token` is run and its output
/// reused for 45 minutes.
#[derive(Debug, Default)]
pub struct GcloudTokenSource {
    cached: Mutex<Option<CachedToken>>,
}

impl GcloudTokenSource {
    /// Token source with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument]
    async fn print_access_token() -> ImagenResult<String> {
        debug!("Requesting access token from gcloud");
        let output = tokio::process::Command::new("gcloud")
            .args(["auth", "application-default", "print-access-token"])
            .output()
            .await
            .map_err(|e| {
                ImagenError::new(ImagenErrorKind::MissingCredentials(format!(
                    "could not run gcloud: {}",
                    e
                )))
            })?;

        if !output.status.success() {
            return Err(ImagenError::new(ImagenErrorKind::MissingCredentials(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            )));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(ImagenError::new(ImagenErrorKind::MissingCredentials(
                "gcloud printed an empty token".to_string(),
            )));
        }
        Ok(token)
    }
}

#[async_trait]
impl AccessTokenSource for GcloudTokenSource {
    async fn access_token(&self) -> ImagenResult<String> {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV)
            && !token.trim().is_empty()
        {
            return Ok(token.trim().to_string());
        }

        let mut cached = self.cached.lock().await;
        if let Some(entry) = cached.as_ref()
            && entry.fetched.elapsed() < TOKEN_REUSE
        {
            return Ok(entry.token.clone());
        }

        let token = Self::print_access_token().await?;
        *cached = Some(CachedToken {
            token: token.clone(),
            fetched: Instant::now(),
        });
        Ok(token)
    }
}
